//! Search Input UI
//!
//! One-line search box. The term matches template names and category names,
//! so the category shortcuts show up here as well.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Box title for the current search state
fn search_title(active: bool, has_query: bool, vim_mode: bool) -> String {
    if active {
        " Search: Enter to keep, Esc to clear ".to_string()
    } else if has_query {
        " Search: Esc to clear ".to_string()
    } else {
        let key = if vim_mode { "/" } else { "/ or Ctrl-F" };
        format!(" Search ({}) ", key)
    }
}

/// Render search input box
///
/// # Arguments
/// - `query`: Current search term
/// - `active`: Whether keystrokes go to the search term
/// - `match_count`: Templates matching the term (None while loading)
/// - `vim_mode`: Whether vim keybindings are enabled
pub fn render_search_input(
    f: &mut Frame,
    area: Rect,
    query: &str,
    active: bool,
    match_count: Option<usize>,
    vim_mode: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(search_title(active, !query.is_empty(), vim_mode))
        .border_style(Style::default().fg(if active { Color::Cyan } else { Color::Gray }));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(16)])
        .split(inner);

    let input = if query.is_empty() && !active {
        Line::from(Span::styled(
            "Search by name or category...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![Span::styled(query.to_string(), Style::default().fg(Color::White))];
        if active {
            spans.push(Span::styled(
                "█",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        Line::from(spans)
    };
    f.render_widget(Paragraph::new(input), columns[0]);

    if let Some(count) = match_count {
        let label = if count == 1 { "match" } else { "matches" };
        f.render_widget(
            Paragraph::new(Span::styled(
                format!("{} {}", count, label),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Right),
            columns[1],
        );
    }
}
