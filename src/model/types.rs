//! Core data types shared by the catalog, the filter engine and the UI.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::logic::errors::ErrorType;

/// Coarse template category, assigned heuristically from the filename
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Animals,
    People,
    Classic,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Animals => "Animals",
            Category::People => "People",
            Category::Classic => "Classic",
            Category::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One candidate background image
///
/// `name` and `category` are derived from the filename; `id` is only
/// meaningful within a single load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub id: u32,
    pub name: String,
    pub url: String,
    pub category: Category,
}

/// Which tier produced a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Parsed from `images.json`
    Manifest,
    /// Built from a local directory scan (`--dir`)
    Discovered,
    /// Built-in list, used because the primary source failed
    Fallback {
        error_type: ErrorType,
        message: String,
    },
}

impl CatalogSource {
    pub fn label(&self) -> &'static str {
        match self {
            CatalogSource::Manifest => "manifest",
            CatalogSource::Discovered => "local directory",
            CatalogSource::Fallback { .. } => "fallback",
        }
    }
}

/// An ordered, immutable list of templates plus its provenance
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub templates: Vec<TemplateRecord>,
    pub source: CatalogSource,
}

/// Catalog loading lifecycle: `Loading` until the first result, then `Ready`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Gallery,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Animals.to_string(), "Animals");
        assert_eq!(Category::General.as_str(), "General");
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(CatalogSource::Manifest.label(), "manifest");
        let fallback = CatalogSource::Fallback {
            error_type: ErrorType::NotFound,
            message: "404".to_string(),
        };
        assert_eq!(fallback.label(), "fallback");
    }
}
