//! UI state transition logic
//!
//! Pure functions for UI state cycling and transitions.

use crate::logic::errors::ErrorType;
use crate::model::types::Category;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Check whether a toast shown `elapsed_ms` ago should be dismissed
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Toast shown when the catalog fell back to the built-in list
///
/// # Examples
/// ```
/// use memegallery::logic::errors::ErrorType;
/// use memegallery::logic::ui::fallback_toast;
///
/// assert_eq!(
///     fallback_toast(&ErrorType::Timeout),
///     "Error: templates timed out, showing built-in list"
/// );
/// ```
pub fn fallback_toast(error_type: &ErrorType) -> String {
    format!("Error: templates {}, showing built-in list", error_type.describe())
}

/// Search term set by a category shortcut (`None` is the "All" shortcut)
pub fn shortcut_term(category: Option<Category>) -> String {
    category.map(|c| c.as_str().to_string()).unwrap_or_default()
}

/// Which shortcut is active for the current search term
///
/// Index 0 is "All" (empty term); index `n` is `categories[n - 1]`. A term
/// that equals no shortcut exactly leaves none highlighted.
///
/// # Examples
/// ```
/// use memegallery::logic::ui::active_shortcut;
/// use memegallery::model::types::Category;
///
/// let categories = [Category::People, Category::Animals];
/// assert_eq!(active_shortcut("", &categories), Some(0));
/// assert_eq!(active_shortcut("Animals", &categories), Some(2));
/// assert_eq!(active_shortcut("animals", &categories), None);
/// ```
pub fn active_shortcut(term: &str, categories: &[Category]) -> Option<usize> {
    if term.is_empty() {
        return Some(0);
    }
    categories
        .iter()
        .position(|c| c.as_str() == term)
        .map(|index| index + 1)
}

/// Cycle to the next category shortcut, wrapping back to "All"
pub fn cycle_shortcut(term: &str, categories: &[Category]) -> Option<Category> {
    match active_shortcut(term, categories) {
        Some(index) if index < categories.len() => Some(categories[index]),
        Some(_) => None,
        None => categories.first().copied(),
    }
}
