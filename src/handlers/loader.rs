//! Catalog Load Handler
//!
//! Stores a finished catalog load, unless it belongs to an activation the
//! user has already left.

use crate::logic::ui::fallback_toast;
use crate::model::types::CatalogSource;
use crate::services::loader::CatalogLoaded;
use crate::{log_debug, App};

pub fn handle_catalog_loaded(app: &mut App, loaded: CatalogLoaded) {
    let CatalogLoaded {
        generation,
        catalog,
    } = loaded;

    let fallback_reason = match &catalog.source {
        CatalogSource::Fallback { error_type, message } => {
            log_debug(&format!(
                "Generation {} resolved to fallback list ({}: {})",
                generation,
                error_type.describe(),
                message
            ));
            Some(error_type.clone())
        }
        _ => None,
    };

    if !app.model.apply_catalog(generation, catalog) {
        log_debug(&format!(
            "Ignoring stale catalog result (generation {}, current {}, mounted {})",
            generation, app.model.catalog.generation, app.model.catalog.mounted
        ));
        return;
    }

    app.loader_task = None;
    if let Some(error_type) = fallback_reason {
        app.model.ui.show_toast(fallback_toast(&error_type));
    }
    log_debug(&format!(
        "Gallery ready with {} templates",
        app.model.catalog.templates.len()
    ));
    app.request_preview_for_selected();
}
