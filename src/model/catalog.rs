//! Catalog Model
//!
//! Holds the templates of the current gallery activation and tracks which
//! load they came from. Each mount starts a new generation; results tagged
//! with any other generation are stale and must be dropped.

use super::types::{Catalog, CatalogSource, Category, LoadState, TemplateRecord};
use crate::logic;

#[derive(Clone, Debug)]
pub struct CatalogModel {
    /// Templates in manifest (or fallback) order
    pub templates: Vec<TemplateRecord>,

    /// Where `templates` came from (None while loading)
    pub source: Option<CatalogSource>,

    /// Distinct categories of `templates`, first-seen order
    pub categories: Vec<Category>,

    pub load_state: LoadState,

    /// Incremented on every mount
    pub generation: u64,

    /// Whether the gallery page is currently active
    pub mounted: bool,
}

impl CatalogModel {
    pub fn new() -> Self {
        Self {
            templates: Vec::new(),
            source: None,
            categories: Vec::new(),
            load_state: LoadState::Loading,
            generation: 0,
            mounted: false,
        }
    }

    /// Start a fresh activation and return its generation
    ///
    /// Discards whatever the previous activation loaded.
    pub fn mount(&mut self) -> u64 {
        self.generation += 1;
        self.mounted = true;
        self.templates.clear();
        self.categories.clear();
        self.source = None;
        self.load_state = LoadState::Loading;
        self.generation
    }

    /// Leave the page; any in-flight result becomes stale
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.templates.clear();
        self.categories.clear();
        self.source = None;
        self.load_state = LoadState::Loading;
    }

    /// Whether a result tagged `generation` belongs to the live activation
    pub fn is_current(&self, generation: u64) -> bool {
        self.mounted && generation == self.generation
    }

    /// Store a loaded catalog if it belongs to the live activation
    ///
    /// # Returns
    /// `true` if accepted, `false` if the result was stale and ignored
    pub fn accept(&mut self, generation: u64, catalog: Catalog) -> bool {
        if !self.is_current(generation) || self.load_state == LoadState::Ready {
            return false;
        }

        self.categories = logic::catalog::distinct_categories(&catalog.templates);
        self.templates = catalog.templates;
        self.source = Some(catalog.source);
        self.load_state = LoadState::Ready;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }
}

impl Default for CatalogModel {
    fn default() -> Self {
        Self::new()
    }
}
