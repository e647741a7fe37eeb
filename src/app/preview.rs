//! Template preview requests
//!
//! Each selected cell gets its own background load. Results are cached by
//! template id for the lifetime of the activation.

use crate::services::preview::{self, ImagePreviewState};
use crate::{log_debug, App};

impl App {
    /// Start loading the preview of the highlighted template, if needed
    pub(crate) fn request_preview_for_selected(&mut self) {
        let Some(picker) = self.image_picker.clone() else {
            return;
        };
        let Some(record) = self.model.gallery.selected_template().cloned() else {
            return;
        };
        if self.image_state_map.contains_key(&record.id) {
            return;
        }

        log_debug(&format!("Requesting preview for template {}", record.id));
        self.image_state_map
            .insert(record.id, ImagePreviewState::Loading);

        preview::spawn_preview_load(
            self.image_fetcher.clone(),
            picker,
            self.model.catalog.generation,
            record,
            self.preview_tx.clone(),
        );
    }

    pub(crate) fn preview_state(&mut self, template_id: u32) -> Option<&mut ImagePreviewState> {
        self.image_state_map.get_mut(&template_id)
    }
}
