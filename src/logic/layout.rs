//! Layout calculation logic
//!
//! Pure functions for sizing the template grid to the terminal.

/// Height of one grid cell in terminal rows (border + name + category + border)
pub const CELL_HEIGHT: u16 = 4;

/// Number of grid columns for a given content width
///
/// Mirrors the responsive breakpoints of the web gallery: 2 columns on
/// narrow screens, then 3, 4 and finally 6.
///
/// # Examples
/// ```
/// use memegallery::logic::layout::grid_columns;
///
/// assert_eq!(grid_columns(40), 2);
/// assert_eq!(grid_columns(80), 3);
/// assert_eq!(grid_columns(110), 4);
/// assert_eq!(grid_columns(200), 6);
/// ```
pub fn grid_columns(content_width: u16) -> usize {
    match content_width {
        0..=59 => 2,
        60..=99 => 3,
        100..=139 => 4,
        _ => 6,
    }
}

/// Number of whole cell rows that fit in `content_height`
pub fn visible_rows(content_height: u16) -> usize {
    (content_height / CELL_HEIGHT).max(1) as usize
}

/// Keep the selected row inside the visible window
///
/// Returns the new first visible row. Scrolls the minimum amount needed.
///
/// # Examples
/// ```
/// use memegallery::logic::layout::scroll_offset;
///
/// assert_eq!(scroll_offset(0, 3, 0), 0);
/// assert_eq!(scroll_offset(5, 3, 0), 3);
/// assert_eq!(scroll_offset(1, 3, 3), 1);
/// ```
pub fn scroll_offset(selected_row: usize, visible_rows: usize, current_offset: usize) -> usize {
    let visible_rows = visible_rows.max(1);
    if selected_row < current_offset {
        selected_row
    } else if selected_row >= current_offset + visible_rows {
        selected_row + 1 - visible_rows
    } else {
        current_offset
    }
}
