//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application,
//! split into focused sub-models:
//!
//! - **CatalogModel**: Loaded templates, load state, activation generation
//! - **GalleryModel**: Search term, page, grid selection
//! - **UiModel**: Active screen, preferences, toasts
//!
//! No I/O lives here; loaders and previews run in `services`.

pub mod catalog;
pub mod gallery;
pub mod types;
pub mod ui;

pub use catalog::CatalogModel;
pub use gallery::GalleryModel;
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub catalog: CatalogModel,
    pub gallery: GalleryModel,
    pub ui: UiModel,
}

impl Model {
    pub fn new(vim_mode: bool, page_size: usize) -> Self {
        Self {
            catalog: CatalogModel::new(),
            gallery: GalleryModel::new(page_size),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Enter the gallery: new activation, fresh filter state
    ///
    /// # Returns
    /// The generation the loader result must carry
    pub fn mount_gallery(&mut self) -> u64 {
        self.gallery.reset();
        self.ui.screen = Screen::Gallery;
        self.catalog.mount()
    }

    /// Leave the gallery for the home screen
    pub fn unmount_gallery(&mut self) {
        self.catalog.unmount();
        self.gallery.reset();
        self.ui.screen = Screen::Home;
    }

    /// Apply a loader result; stale results are ignored
    pub fn apply_catalog(&mut self, generation: u64, catalog: Catalog) -> bool {
        if !self.catalog.accept(generation, catalog) {
            return false;
        }
        self.gallery.refilter(&self.catalog.templates);
        true
    }

    /// Change the search term (resets to page 1)
    pub fn set_search_term(&mut self, term: String) {
        self.gallery.set_search_term(term, &self.catalog.templates);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::catalog::{fallback_templates, records_from_manifest};
    use crate::logic::errors::ErrorType;

    #[test]
    fn test_model_creation() {
        let model = Model::new(false, 24);
        assert_eq!(model.ui.screen, Screen::Home);
        assert_eq!(model.gallery.page_size, 24);
        assert!(model.catalog.is_loading());
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new(false, 24);
        let _cloned = model.clone();
    }

    #[test]
    fn test_mount_then_fallback_reaches_ready() {
        let mut model = Model::new(false, 24);
        let generation = model.mount_gallery();
        assert_eq!(model.ui.screen, Screen::Gallery);

        let applied = model.apply_catalog(
            generation,
            Catalog {
                templates: fallback_templates(),
                source: CatalogSource::Fallback {
                    error_type: ErrorType::ConnectionRefused,
                    message: "connection refused".to_string(),
                },
            },
        );
        assert!(applied);
        assert_eq!(model.catalog.load_state, LoadState::Ready);
        assert_eq!(model.gallery.filtered.len(), 24);
        assert_eq!(model.gallery.page_items().len(), 24);
    }

    #[test]
    fn test_search_term_survives_catalog_arrival() {
        let mut model = Model::new(false, 24);
        let generation = model.mount_gallery();
        model.set_search_term("cat".to_string());
        model.apply_catalog(
            generation,
            Catalog {
                templates: records_from_manifest(&[
                    "happy_cat.png".to_string(),
                    "drake.png".to_string(),
                ]),
                source: CatalogSource::Manifest,
            },
        );
        assert_eq!(model.gallery.filtered.len(), 1);
        assert_eq!(model.gallery.current_page, 1);
    }

    #[test]
    fn test_unmount_discards_catalog() {
        let mut model = Model::new(false, 24);
        let generation = model.mount_gallery();
        model.apply_catalog(
            generation,
            Catalog {
                templates: fallback_templates(),
                source: CatalogSource::Manifest,
            },
        );
        model.unmount_gallery();
        assert!(model.catalog.templates.is_empty());
        assert!(model.gallery.filtered.is_empty());
        assert_eq!(model.ui.screen, Screen::Home);
    }
}
