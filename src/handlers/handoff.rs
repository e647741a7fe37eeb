use crate::{log_debug, App, HandoffMessage};

/// Act on a message posted by the selection handoff callbacks
pub fn handle_handoff(app: &mut App, message: HandoffMessage) {
    match message {
        HandoffMessage::TemplateSelected(url) => {
            log_debug(&format!("Handoff: template {}", url));
            app.model.ui.show_toast(format!("Template selected: {}", url));
            app.model.ui.chosen_template_url = Some(url);
        }
        HandoffMessage::BackToHome => {
            log_debug("Handoff: back to home");
            app.unmount_gallery();
        }
    }
}
