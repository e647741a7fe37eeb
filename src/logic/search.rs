//! Search Logic
//!
//! Pure functions for filtering templates by a search term. Matching is a
//! case-insensitive substring test against the template name or its
//! category, and the catalog order is always preserved.

use crate::model::types::TemplateRecord;

/// Check whether a template matches a search term
///
/// Whitespace-only terms match everything. Non-blank terms are used as
/// typed (not trimmed), so "cat " only matches names containing "cat ".
///
/// # Examples
/// ```
/// use memegallery::logic::search::search_matches;
/// use memegallery::model::types::{Category, TemplateRecord};
///
/// let record = TemplateRecord {
///     id: 1,
///     name: "Grumpy Cat".to_string(),
///     url: "/grumpy_cat.png".to_string(),
///     category: Category::Animals,
/// };
/// assert!(search_matches("grumpy", &record));
/// assert!(search_matches("ANIMAL", &record));
/// assert!(search_matches("  ", &record));
/// assert!(!search_matches("dog", &record));
/// ```
pub fn search_matches(term: &str, record: &TemplateRecord) -> bool {
    if term.trim().is_empty() {
        return true;
    }

    let term_lower = term.to_lowercase();
    record.name.to_lowercase().contains(&term_lower)
        || record.category.as_str().to_lowercase().contains(&term_lower)
}

/// Filter a list of templates by search term
///
/// # Returns
/// The subsequence of `templates` matching `term`, in original order. A blank
/// term returns the whole list unchanged.
pub fn filter_templates(templates: &[TemplateRecord], term: &str) -> Vec<TemplateRecord> {
    if term.trim().is_empty() {
        return templates.to_vec();
    }

    templates
        .iter()
        .filter(|record| search_matches(term, record))
        .cloned()
        .collect()
}
