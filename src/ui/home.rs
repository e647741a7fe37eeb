use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Lines of the home screen
fn build_home_lines(chosen_template_url: Option<&str>) -> Vec<Line<'static>> {
    let key = Style::default().fg(Color::Yellow);

    let mut lines = vec![
        Line::from(Span::styled(
            "Meme Generator",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    match chosen_template_url {
        Some(url) => {
            lines.push(Line::from(Span::styled(
                "Selected template:",
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(Span::styled(
                url.to_string(),
                Style::default().fg(Color::Green),
            )));
        }
        None => lines.push(Line::from(Span::styled(
            "No template selected yet",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("t", key),
        Span::raw(":Browse templates  "),
        Span::styled("q", key),
        Span::raw(":Quit"),
    ]));

    lines
}

/// Render the home screen
pub fn render_home(f: &mut Frame, area: Rect, chosen_template_url: Option<&str>) {
    let lines = build_home_lines(chosen_template_url);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let top_pad = inner.height.saturating_sub(lines.len() as u16) / 2;
    let content_area = Rect {
        y: inner.y + top_pad,
        height: inner.height.saturating_sub(top_pad),
        ..inner
    };

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        content_area,
    );
}
