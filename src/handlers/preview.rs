use crate::services::preview::{ImagePreviewState, PreviewUpdate};
use crate::{log_debug, App};

/// Store a finished preview; results from a previous activation are dropped
pub fn handle_preview_update(app: &mut App, update: PreviewUpdate) {
    if !app.model.catalog.is_current(update.generation) {
        log_debug(&format!(
            "Dropping preview for template {} from stale generation {}",
            update.template_id, update.generation
        ));
        return;
    }

    if let ImagePreviewState::Ready { metadata, .. } = &update.state {
        if metadata.is_placeholder {
            log_debug(&format!(
                "Template {} shown with placeholder {}",
                update.template_id, metadata.source_url
            ));
        }
    }

    app.image_state_map.insert(update.template_id, update.state);
}
