use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    vim_mode: bool,
    search_mode: bool,
    has_search_query: bool,
    multiple_pages: bool,
) -> Vec<Span<'static>> {
    if search_mode {
        return vec![
            key("Enter"),
            Span::raw(":Accept  "),
            key("Esc"),
            Span::raw(":Cancel  "),
            key("Backspace"),
            Span::raw(":Delete"),
        ];
    }

    let mut hotkey_spans = vec![];

    if vim_mode {
        hotkey_spans.extend(vec![key("hjkl"), Span::raw(":Move  ")]);
    } else {
        hotkey_spans.extend(vec![key("←↑↓→"), Span::raw(":Move  ")]);
    }

    hotkey_spans.extend(vec![key("Enter"), Span::raw(":Use template  ")]);

    // Search key - contextual based on search state
    if has_search_query {
        hotkey_spans.extend(vec![key("Esc"), Span::raw(":Clear Search  ")]);
    } else {
        let search_key = if vim_mode { "/" } else { "^F" };
        hotkey_spans.extend(vec![key(search_key), Span::raw(":Search  ")]);
    }

    hotkey_spans.extend(vec![key("Tab/0-9"), Span::raw(":Category  ")]);

    if multiple_pages {
        hotkey_spans.extend(vec![key("[/]"), Span::raw(":Page  ")]);
    }

    hotkey_spans.extend(vec![
        key("b"),
        Span::raw(":Back  "),
        key("q"),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(
    vim_mode: bool,
    search_mode: bool,
    has_search_query: bool,
    multiple_pages: bool,
) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(
        vim_mode,
        search_mode,
        has_search_query,
        multiple_pages,
    ));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    vim_mode: bool,
    search_mode: bool,
    has_search_query: bool,
    multiple_pages: bool,
) {
    let legend = build_legend_paragraph(vim_mode, search_mode, has_search_query, multiple_pages);
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    vim_mode: bool,
    search_mode: bool,
    has_search_query: bool,
    multiple_pages: bool,
) -> u16 {
    // Count lines without the block, line_count() doesn't account for borders
    let hotkey_line = Line::from(build_hotkey_spans(
        vim_mode,
        search_mode,
        has_search_query,
        multiple_pages,
    ));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
