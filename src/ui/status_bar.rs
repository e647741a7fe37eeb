use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::types::{CatalogSource, TemplateRecord};

/// Build the status line ("Label: value | Label: value")
pub fn build_status_line(
    source: Option<&CatalogSource>,
    origin_label: &str,
    current_page: usize,
    page_count: usize,
    selected: Option<&TemplateRecord>,
) -> String {
    let mut metrics = Vec::new();

    match source {
        None => metrics.push(format!("Source: loading {}", origin_label)),
        Some(CatalogSource::Fallback { error_type, .. }) => {
            metrics.push("Source: fallback".to_string());
            metrics.push(format!("Reason: {}", error_type.describe()));
        }
        Some(source) => metrics.push(format!("Source: {} ({})", source.label(), origin_label)),
    }

    if page_count > 0 {
        metrics.push(format!("Page: {}/{}", current_page, page_count));
    }

    if let Some(record) = selected {
        metrics.push(format!("Selected: {} [{}]", record.name, record.category));
    }

    metrics.join(" | ")
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, status_line: &str) {
    // Color the labels (before colons)
    let mut spans = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }

        if part.starts_with("Reason:") {
            spans.push(Span::styled(part.to_string(), Style::default().fg(Color::Red)));
        } else if let Some(colon_pos) = part.find(':') {
            let label = &part[..=colon_pos];
            let value = &part[colon_pos + 1..];
            spans.push(Span::styled(label.to_string(), Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(value.to_string()));
        } else {
            spans.push(Span::raw(part.to_string()));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(paragraph, area);
}
