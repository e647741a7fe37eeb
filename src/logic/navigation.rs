//! Grid selection logic
//!
//! Pure functions for moving the highlighted cell within the current page.
//! Horizontal moves wrap around the page; vertical moves step by a whole
//! row and stop at the edges.

/// Calculate the next selection index with wrapping
///
/// # Examples
/// ```
/// use memegallery::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
///
/// # Examples
/// ```
/// use memegallery::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1,
        Some(i) => i - 1,
    })
}

/// Move down one row, keeping the column; stays put on the last row
pub fn row_down(current: Option<usize>, list_len: usize, columns: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    let columns = columns.max(1);
    Some(match current {
        Some(i) if i + columns < list_len => i + columns,
        Some(i) => i.min(list_len - 1),
        None => 0,
    })
}

/// Move up one row, keeping the column; stays put on the first row
pub fn row_up(current: Option<usize>, list_len: usize, columns: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    let columns = columns.max(1);
    Some(match current {
        Some(i) if i >= columns => (i - columns).min(list_len - 1),
        Some(i) => i.min(list_len - 1),
        None => 0,
    })
}

/// Clamp a selection after the page contents changed
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        None
    } else {
        Some(current.unwrap_or(0).min(list_len - 1))
    }
}
