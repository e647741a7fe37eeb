//! UI Model
//!
//! This sub-model contains state related to the user interface that is
//! not specific to the gallery page: the active screen, preferences, and
//! transient popups.

use std::time::Instant;

use super::types::Screen;

#[derive(Clone, Debug)]
pub struct UiModel {
    pub screen: Screen,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// URL handed off by the last template selection
    pub chosen_template_url: Option<String>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            screen: Screen::Home,
            vim_mode,
            chosen_template_url: None,
            toast_message: None,
            should_quit: false,
        }
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        self.toast_message
            .as_ref()
            .map(|(_, shown_at)| {
                crate::logic::ui::should_dismiss_toast(shown_at.elapsed().as_millis())
            })
            .unwrap_or(false)
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
