use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logic::ui::active_shortcut;
use crate::model::types::Category;

/// Build the shortcut chips: "0 All", "1 People", ...
fn build_shortcut_spans(search_term: &str, categories: &[Category]) -> Vec<Span<'static>> {
    let active = active_shortcut(search_term, categories);

    let labels = std::iter::once("All").chain(categories.iter().map(|c| c.as_str()));

    let mut spans = Vec::new();
    for (index, label) in labels.enumerate() {
        let style = if active == Some(index) {
            Style::default()
                .fg(Color::White)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        spans.push(Span::styled(format!("{}", index), Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw("  "));
    }
    spans
}

/// Render the category shortcut row
pub fn render_categories(f: &mut Frame, area: Rect, search_term: &str, categories: &[Category]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Categories (Tab / 0-9) ")
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(Line::from(build_shortcut_spans(search_term, categories)))
        .block(block);

    f.render_widget(paragraph, area);
}
