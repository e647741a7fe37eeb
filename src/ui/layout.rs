use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Minimum terminal width at which the preview pane is shown
const PREVIEW_MIN_WIDTH: u16 = 90;

/// Layout information for the gallery screen
pub struct LayoutInfo {
    /// Title bar with counts
    pub header_area: Rect,
    /// Search input
    pub search_area: Rect,
    /// Category shortcut row
    pub categories_area: Rect,
    /// Template grid (or loading / empty message)
    pub grid_area: Rect,
    /// Image preview pane (if wide enough and enabled)
    pub preview_area: Option<Rect>,
    /// Page buttons (only when there is more than one page)
    pub pagination_area: Option<Rect>,
    /// Hotkey legend
    pub legend_area: Rect,
    /// Bottom status bar
    pub status_area: Rect,
}

/// Calculate the screen layout for the gallery
pub fn calculate_layout(
    terminal_size: Rect,
    show_pagination: bool,
    legend_height: u16,
    preview_enabled: bool,
) -> LayoutInfo {
    let pagination_height = if show_pagination { 3 } else { 0 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // Header
            Constraint::Length(3),                 // Search input
            Constraint::Length(3),                 // Category shortcuts
            Constraint::Min(4),                    // Grid + preview
            Constraint::Length(pagination_height), // Pagination bar
            Constraint::Length(legend_height),     // Legend
            Constraint::Length(3),                 // Status bar
        ])
        .split(terminal_size);

    let content_area = main_chunks[3];
    let (grid_area, preview_area) =
        if preview_enabled && content_area.width >= PREVIEW_MIN_WIDTH {
            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
                .split(content_area);
            (panes[0], Some(panes[1]))
        } else {
            (content_area, None)
        };

    LayoutInfo {
        header_area: main_chunks[0],
        search_area: main_chunks[1],
        categories_area: main_chunks[2],
        grid_area,
        preview_area,
        pagination_area: if show_pagination {
            Some(main_chunks[4])
        } else {
            None
        },
        legend_area: main_chunks[5],
        status_area: main_chunks[6],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_area_only_when_needed() {
        let size = Rect::new(0, 0, 120, 40);
        assert!(calculate_layout(size, false, 3, false).pagination_area.is_none());
        assert!(calculate_layout(size, true, 3, false).pagination_area.is_some());
    }

    #[test]
    fn test_preview_needs_width() {
        let wide = calculate_layout(Rect::new(0, 0, 120, 40), false, 3, true);
        let narrow = calculate_layout(Rect::new(0, 0, 80, 40), false, 3, true);
        let disabled = calculate_layout(Rect::new(0, 0, 120, 40), false, 3, false);

        assert!(wide.preview_area.is_some());
        assert!(wide.grid_area.width < 120);
        assert!(narrow.preview_area.is_none());
        assert!(disabled.preview_area.is_none());
        assert_eq!(disabled.grid_area.width, 120);
    }
}
