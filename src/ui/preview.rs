//! Template Preview Pane
//!
//! Shows the highlighted template's image (when the terminal supports it)
//! above a few lines of metadata.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use ratatui_image::StatefulImage;

use crate::model::types::TemplateRecord;
use crate::services::preview::{ImageMetadata, ImagePreviewState};
use crate::utils;

/// Metadata lines under the image
fn build_info_lines(
    record: &TemplateRecord,
    metadata: Option<&ImageMetadata>,
) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Yellow);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Category: ", label),
            Span::raw(record.category.as_str()),
        ]),
        Line::from(vec![
            Span::styled("URL: ", label),
            Span::raw(record.url.clone()),
        ]),
    ];

    if let Some(metadata) = metadata {
        let dimensions = metadata
            .dimensions
            .map(|(w, h)| format!("{}×{}", w, h))
            .unwrap_or_else(|| "unknown".to_string());
        lines.push(Line::from(vec![
            Span::styled("Size: ", label),
            Span::raw(format!(
                "{} ({})",
                dimensions,
                utils::format_bytes(metadata.byte_size)
            )),
        ]));

        if metadata.is_placeholder {
            lines.push(Line::from(Span::styled(
                "Image unavailable, showing placeholder",
                Style::default().fg(Color::Red),
            )));
        }
    }

    lines
}

fn render_centered_text(f: &mut Frame, area: Rect, text: String, color: Color) {
    let top_pad = area.height.saturating_sub(1) / 2;
    let text_area = Rect {
        y: area.y + top_pad,
        height: area.height.saturating_sub(top_pad),
        ..area
    };
    f.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(color)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        text_area,
    );
}

/// Render the preview pane for `record`
///
/// `state` is `None` when no preview has been requested (image previews
/// disabled or unsupported).
pub fn render_preview(
    f: &mut Frame,
    area: Rect,
    record: Option<&TemplateRecord>,
    state: Option<&mut ImagePreviewState>,
) {
    let title = record
        .map(|r| format!(" {} ", r.name))
        .unwrap_or_else(|| " Preview ".to_string());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(record) = record else {
        render_centered_text(f, inner, "Nothing selected".to_string(), Color::DarkGray);
        return;
    };

    let metadata = match state.as_deref() {
        Some(ImagePreviewState::Ready { metadata, .. }) => Some(metadata.clone()),
        _ => None,
    };
    let info_lines = build_info_lines(record, metadata.as_ref());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(info_lines.len() as u16 + 1),
        ])
        .split(inner);

    match state {
        Some(ImagePreviewState::Ready { protocol, .. }) => {
            f.render_stateful_widget(StatefulImage::default(), chunks[0], protocol);
        }
        Some(ImagePreviewState::Loading) => {
            render_centered_text(f, chunks[0], "Loading preview...".to_string(), Color::Yellow);
        }
        Some(ImagePreviewState::Failed { message }) => {
            render_centered_text(
                f,
                chunks[0],
                format!("Preview unavailable: {}", message),
                Color::Red,
            );
        }
        None => {
            render_centered_text(f, chunks[0], "No image preview".to_string(), Color::DarkGray);
        }
    }

    f.render_widget(
        Paragraph::new(info_lines).wrap(Wrap { trim: false }),
        chunks[1],
    );
}
