//! Pagination logic
//!
//! Pure functions for slicing the filtered template list into fixed-size
//! pages. Page numbers are 1-based throughout.

/// Templates per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 24;

/// Maximum number of numbered page buttons shown at once
pub const PAGE_WINDOW: usize = 5;

/// Number of pages needed for `len` items (0 for an empty list)
///
/// # Examples
/// ```
/// use memegallery::logic::pagination::page_count;
///
/// assert_eq!(page_count(0, 24), 0);
/// assert_eq!(page_count(24, 24), 1);
/// assert_eq!(page_count(25, 24), 2);
/// ```
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Slice out one page
///
/// Returns an empty slice when `page_number` is 0 or past the last page.
///
/// # Examples
/// ```
/// use memegallery::logic::pagination::paginate;
///
/// let items: Vec<u32> = (1..=5).collect();
/// assert_eq!(paginate(&items, 2, 1), &[1, 2]);
/// assert_eq!(paginate(&items, 2, 3), &[5]);
/// assert!(paginate(&items, 2, 4).is_empty());
/// ```
pub fn paginate<T>(items: &[T], page_size: usize, page_number: usize) -> &[T] {
    if page_number == 0 || page_number > page_count(items.len(), page_size) {
        return &[];
    }

    let start = (page_number - 1) * page_size;
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Advance one page, staying on the last page
pub fn next_page(current: usize, total_pages: usize) -> usize {
    (current + 1).min(total_pages.max(1))
}

/// Go back one page, staying on page 1
pub fn prev_page(current: usize) -> usize {
    current.saturating_sub(1).max(1)
}

/// Page numbers for the numbered buttons around `current`
///
/// Up to five numbers: the first five while `current <= 3`, otherwise
/// `current - 2 ..= current + 2`. Numbers past `total_pages` are dropped.
///
/// # Examples
/// ```
/// use memegallery::logic::pagination::page_window;
///
/// assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
/// assert_eq!(page_window(6, 10), vec![4, 5, 6, 7, 8]);
/// assert_eq!(page_window(10, 10), vec![8, 9, 10]);
/// assert_eq!(page_window(1, 2), vec![1, 2]);
/// ```
pub fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    let shown = PAGE_WINDOW.min(total_pages);
    let first = if current <= 3 { 1 } else { current - 2 };

    (first..first + shown)
        .filter(|page| *page <= total_pages)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_zero_size() {
        assert_eq!(page_count(10, 0), 0);
    }

    #[test]
    fn test_paginate_reference_page_size() {
        let items: Vec<u32> = (1..=50).collect();
        assert_eq!(paginate(&items, DEFAULT_PAGE_SIZE, 1).len(), 24);
        assert_eq!(paginate(&items, DEFAULT_PAGE_SIZE, 2).len(), 24);
        assert_eq!(paginate(&items, DEFAULT_PAGE_SIZE, 3), &[49, 50]);
        assert!(paginate(&items, DEFAULT_PAGE_SIZE, 4).is_empty());
    }

    #[test]
    fn test_paginate_page_zero_is_empty() {
        let items = [1, 2, 3];
        assert!(paginate(&items, 2, 0).is_empty());
    }

    #[test]
    fn test_paginate_empty_list() {
        let items: [u8; 0] = [];
        assert!(paginate(&items, 24, 1).is_empty());
    }

    #[test]
    fn test_pages_reconstruct_list() {
        for len in [0usize, 1, 23, 24, 25, 48, 49, 100] {
            let items: Vec<usize> = (0..len).collect();
            for size in [1usize, 7, 24] {
                let pages = page_count(len, size);
                let mut rebuilt = Vec::new();
                for page in 1..=pages {
                    let slice = paginate(&items, size, page);
                    assert!(slice.len() <= size);
                    rebuilt.extend_from_slice(slice);
                }
                assert_eq!(rebuilt, items, "len {} size {}", len, size);
            }
        }
    }

    #[test]
    fn test_next_page_clamps() {
        assert_eq!(next_page(1, 3), 2);
        assert_eq!(next_page(3, 3), 3);
        assert_eq!(next_page(1, 0), 1);
    }

    #[test]
    fn test_prev_page_clamps() {
        assert_eq!(prev_page(3), 2);
        assert_eq!(prev_page(1), 1);
        assert_eq!(prev_page(0), 1);
    }

    #[test]
    fn test_page_window_shapes() {
        assert_eq!(page_window(1, 0), Vec::<usize>::new());
        assert_eq!(page_window(1, 1), vec![1]);
        assert_eq!(page_window(3, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(4, 10), vec![2, 3, 4, 5, 6]);
        assert_eq!(page_window(9, 10), vec![7, 8, 9, 10]);
        assert_eq!(page_window(4, 4), vec![2, 3, 4]);
    }
}
