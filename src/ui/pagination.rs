use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logic::pagination::page_window;

/// Build "‹ Previous  1  2  [3]  4  5  Next ›"
///
/// Previous and Next are dimmed at the first and last page.
fn build_pagination_spans(current_page: usize, page_count: usize) -> Vec<Span<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let normal = Style::default().fg(Color::Gray);
    let current = Style::default()
        .fg(Color::White)
        .bg(Color::Magenta)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled(
        "‹ Previous",
        if current_page <= 1 { dim } else { normal },
    )];

    for page in page_window(current_page, page_count) {
        spans.push(Span::raw("  "));
        if page == current_page {
            spans.push(Span::styled(format!(" {} ", page), current));
        } else {
            spans.push(Span::styled(format!(" {} ", page), normal));
        }
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        "Next ›",
        if current_page >= page_count { dim } else { normal },
    ));
    spans
}

/// Render the pagination bar (only called when there is more than one page)
pub fn render_pagination(f: &mut Frame, area: Rect, current_page: usize, page_count: usize) {
    let paragraph = Paragraph::new(Line::from(build_pagination_spans(current_page, page_count)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_pagination_text() {
        let spans = build_pagination_spans(1, 3);
        assert_eq!(text(&spans), "‹ Previous   1    2    3   Next ›");
    }

    #[test]
    fn test_previous_dimmed_on_first_page() {
        let spans = build_pagination_spans(1, 3);
        assert_eq!(spans[0].style.fg, Some(Color::DarkGray));
        assert_eq!(spans.last().map(|s| s.style.fg), Some(Some(Color::Gray)));
    }

    #[test]
    fn test_next_dimmed_on_last_page() {
        let spans = build_pagination_spans(3, 3);
        assert_eq!(spans[0].style.fg, Some(Color::Gray));
        assert_eq!(spans.last().map(|s| s.style.fg), Some(Some(Color::DarkGray)));
    }
}
