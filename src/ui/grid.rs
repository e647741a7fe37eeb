//! Template Grid
//!
//! Renders the current page as a grid of cells (name + category badge).
//! Pages taller than the screen scroll by whole rows to keep the selected
//! cell visible.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::logic::layout::{grid_columns, scroll_offset, visible_rows, CELL_HEIGHT};
use crate::model::types::{Category, TemplateRecord};

/// Shape of the grid as rendered (fed back into the model for navigation)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub columns: usize,
    pub row_offset: usize,
}

/// Truncate `text` to at most `max_width` terminal columns, adding "…" when cut
///
/// Wide characters count as two columns, so "Drake Pointing" at width 8
/// becomes "Drake P…".
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        used += w;
        result.push(c);
    }
    result.push('…');
    result
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Animals => Color::Green,
        Category::People => Color::Cyan,
        Category::Classic => Color::Yellow,
        Category::General => Color::Gray,
    }
}

/// Render the template cells of the current page
///
/// Returns the grid shape used, so key handling can move by rows.
pub fn render_grid(
    f: &mut Frame,
    area: Rect,
    items: &[TemplateRecord],
    selected: Option<usize>,
    row_offset: usize,
) -> GridShape {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Templates ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = grid_columns(inner.width);
    let rows_visible = visible_rows(inner.height);
    let selected_row = selected.map(|idx| idx / columns).unwrap_or(0);
    let row_offset = scroll_offset(selected_row, rows_visible, row_offset);

    if inner.width == 0 || inner.height < CELL_HEIGHT {
        return GridShape { columns, row_offset };
    }

    let cell_width = inner.width / columns as u16;
    let first = row_offset * columns;
    let last = (first + rows_visible * columns).min(items.len());

    for (offset, record) in items.iter().enumerate().take(last).skip(first) {
        let row = (offset / columns - row_offset) as u16;
        let col = (offset % columns) as u16;
        let cell = Rect {
            x: inner.x + col * cell_width,
            y: inner.y + row * CELL_HEIGHT,
            width: cell_width,
            height: CELL_HEIGHT,
        };
        render_cell(f, cell, record, selected == Some(offset));
    }

    GridShape { columns, row_offset }
}

fn render_cell(f: &mut Frame, area: Rect, record: &TemplateRecord, is_selected: bool) {
    let border_style = if is_selected {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let name_style = if is_selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let text_width = area.width.saturating_sub(2) as usize;
    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&record.name, text_width),
            name_style,
        )),
        Line::from(Span::styled(
            record.category.as_str(),
            Style::default().fg(category_color(record.category)),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).border_style(border_style))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

/// Placeholder shown while the catalog is being fetched
pub fn render_loading(f: &mut Frame, area: Rect) {
    render_message(
        f,
        area,
        vec![Line::from(Span::styled(
            "Loading templates...",
            Style::default().fg(Color::Yellow),
        ))],
    );
}

/// Shown when the search matches nothing
pub fn render_empty(f: &mut Frame, area: Rect) {
    render_message(
        f,
        area,
        vec![
            Line::from(Span::styled(
                "No templates found",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Try adjusting your search terms",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    );
}

fn render_message(f: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Templates ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Vertically center the message
    let top_pad = inner.height.saturating_sub(lines.len() as u16) / 2;
    let message_area = Rect {
        y: inner.y + top_pad,
        height: inner.height.saturating_sub(top_pad),
        ..inner
    };

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        message_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn record(id: u32, name: &str) -> TemplateRecord {
        TemplateRecord {
            id,
            name: name.to_string(),
            url: format!("/{}.png", name),
            category: Category::General,
        }
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Drake Pointing", 8), "Drake P…");
        assert_eq!(truncate_to_width("Drake", 8), "Drake");
        assert_eq!(truncate_to_width("Drake", 0), "");
    }

    #[test]
    fn test_truncate_wide_characters() {
        // Each CJK character is two columns wide
        assert_eq!(truncate_to_width("猫猫猫猫", 5), "猫猫…");
    }

    #[test]
    fn test_render_grid_shape_and_names() {
        let backend = TestBackend::new(62, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let items = vec![record(1, "drake"), record(2, "success kid")];

        let mut shape = None;
        terminal
            .draw(|f| {
                shape = Some(render_grid(f, f.area(), &items, Some(1), 0));
            })
            .unwrap();

        // 60 inner columns -> 3 per row
        assert_eq!(shape, Some(GridShape { columns: 3, row_offset: 0 }));
        let text = buffer_text(&terminal);
        assert!(text.contains("drake"));
        assert!(text.contains("success kid"));
    }

    #[test]
    fn test_render_grid_scrolls_to_selection() {
        // Inner height 8 -> two rows of cells visible
        let backend = TestBackend::new(42, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let items: Vec<TemplateRecord> = (1..=10).map(|i| record(i, &format!("t{}", i))).collect();

        let mut shape = None;
        terminal
            .draw(|f| {
                // 2 columns; index 9 is on row 4
                shape = Some(render_grid(f, f.area(), &items, Some(9), 0));
            })
            .unwrap();

        assert_eq!(shape, Some(GridShape { columns: 2, row_offset: 3 }));
        let text = buffer_text(&terminal);
        assert!(text.contains("t10"));
        assert!(!text.contains("t1 "));
    }

    #[test]
    fn test_render_empty_message() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_empty(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("No templates found"));
        assert!(text.contains("Try adjusting your search terms"));
    }
}
