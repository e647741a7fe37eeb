//! Gallery page lifecycle and interactions
//!
//! Mounting starts exactly one catalog load; unmounting aborts it and
//! drops everything the page held.

use crate::logic::{navigation, ui as ui_logic};
use crate::model::types::{Category, Screen};
use crate::services::loader;
use crate::{log_debug, App};

impl App {
    /// Open the gallery page and start its catalog load
    pub(crate) fn mount_gallery(&mut self) {
        self.abort_loader();
        self.image_state_map.clear();

        let generation = self.model.mount_gallery();
        log_debug(&format!("Mounting gallery (generation {})", generation));

        self.loader_task = Some(loader::spawn_catalog_load(
            self.origin.clone(),
            generation,
            self.loader_tx.clone(),
        ));
    }

    /// Leave the gallery page; a load still in flight is abandoned
    pub(crate) fn unmount_gallery(&mut self) {
        if self.model.ui.screen != Screen::Gallery {
            return;
        }
        self.abort_loader();
        self.image_state_map.clear();
        self.model.unmount_gallery();
        log_debug("Unmounted gallery");
    }

    fn abort_loader(&mut self) {
        if let Some(task) = self.loader_task.take() {
            if !task.is_finished() {
                log_debug("Aborting in-flight catalog load");
            }
            task.abort();
        }
    }

    /// Replace the search term (page returns to 1)
    pub(crate) fn set_search_term(&mut self, term: String) {
        self.model.set_search_term(term);
        self.request_preview_for_selected();
    }

    pub(crate) fn push_search_char(&mut self, c: char) {
        let mut term = self.model.gallery.search_term.clone();
        term.push(c);
        self.set_search_term(term);
    }

    pub(crate) fn pop_search_char(&mut self) {
        let mut term = self.model.gallery.search_term.clone();
        if term.pop().is_some() {
            self.set_search_term(term);
        }
    }

    /// Apply a category shortcut (`None` is "All")
    pub(crate) fn apply_category_shortcut(&mut self, category: Option<Category>) {
        self.set_search_term(ui_logic::shortcut_term(category));
    }

    /// Select shortcut by number key: 0 is "All", 1.. are categories
    pub(crate) fn apply_shortcut_index(&mut self, index: usize) {
        if index == 0 {
            self.apply_category_shortcut(None);
        } else if let Some(category) = self.model.catalog.categories.get(index - 1).copied() {
            self.apply_category_shortcut(Some(category));
        }
    }

    pub(crate) fn cycle_category_shortcut(&mut self) {
        let next = ui_logic::cycle_shortcut(
            &self.model.gallery.search_term,
            &self.model.catalog.categories,
        );
        self.apply_category_shortcut(next);
    }

    pub(crate) fn next_page(&mut self) {
        self.model.gallery.next_page();
        self.request_preview_for_selected();
    }

    pub(crate) fn prev_page(&mut self) {
        self.model.gallery.prev_page();
        self.request_preview_for_selected();
    }

    /// Move the highlighted cell; `columns` is the grid width on screen
    pub(crate) fn move_selection(&mut self, movement: GridMove, columns: usize) {
        let len = self.model.gallery.page_items().len();
        let current = self.model.gallery.selected_index;
        self.model.gallery.selected_index = match movement {
            GridMove::Left => navigation::prev_selection(current, len),
            GridMove::Right => navigation::next_selection(current, len),
            GridMove::Up => navigation::row_up(current, len, columns),
            GridMove::Down => navigation::row_down(current, len, columns),
        };
        self.request_preview_for_selected();
    }

    /// Hand off the highlighted template and return home
    pub(crate) fn choose_selected(&mut self) {
        if let Some(record) = self.model.gallery.selected_template().cloned() {
            log_debug(&format!("Template selected: {} ({})", record.name, record.url));
            self.handoff.select_template(&record);
        }
    }

    pub(crate) fn back_to_home(&mut self) {
        self.handoff.back_to_home();
    }

    /// Where this session's catalog is loaded from
    pub(crate) fn origin_label(&self) -> String {
        self.origin.describe()
    }
}

/// Direction of a grid cursor move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GridMove {
    Left,
    Right,
    Up,
    Down,
}
