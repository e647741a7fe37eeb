use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar with result and category counts
///
/// Counts are hidden while the catalog is still loading.
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    found: Option<usize>,
    category_count: Option<usize>,
) {
    let mut spans = vec![Span::styled(
        "▦ Meme Templates",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )];

    if let (Some(found), Some(category_count)) = (found, category_count) {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("{} templates found", found),
            Style::default().fg(Color::Gray),
        ));
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("{} categories", category_count),
            Style::default().fg(Color::Gray),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}
