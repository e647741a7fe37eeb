//! Gallery Model
//!
//! Search term, pagination and grid selection for the template page. The
//! filtered list is derived from the catalog and re-derived whenever the
//! catalog or the search term changes.

use super::types::TemplateRecord;
use crate::logic::{navigation, pagination, search};

#[derive(Clone, Debug)]
pub struct GalleryModel {
    /// Current search term (also set by the category shortcuts)
    pub search_term: String,

    /// Whether the search input is receiving keystrokes
    pub search_mode: bool,

    /// 1-based page number into `filtered`
    pub current_page: usize,

    pub page_size: usize,

    /// Catalog filtered by `search_term`
    pub filtered: Vec<TemplateRecord>,

    /// Selected cell within the current page
    pub selected_index: Option<usize>,

    /// First visible grid row (for pages taller than the screen)
    pub row_offset: usize,

    /// Columns of the grid as last rendered (drives up/down movement)
    pub grid_columns: usize,
}

impl GalleryModel {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            search_mode: false,
            current_page: 1,
            page_size: page_size.max(1),
            filtered: Vec::new(),
            selected_index: None,
            row_offset: 0,
            grid_columns: 1,
        }
    }

    /// Reset everything except the page size and grid shape (used on mount)
    pub fn reset(&mut self) {
        let grid_columns = self.grid_columns;
        *self = Self::new(self.page_size);
        self.grid_columns = grid_columns;
    }

    /// Re-derive the filtered list after the catalog changed
    pub fn refilter(&mut self, templates: &[TemplateRecord]) {
        self.filtered = search::filter_templates(templates, &self.search_term);
        self.go_to_page(1);
    }

    /// Change the search term; always returns to page 1
    pub fn set_search_term(&mut self, term: String, templates: &[TemplateRecord]) {
        self.search_term = term;
        self.refilter(templates);
    }

    pub fn page_count(&self) -> usize {
        pagination::page_count(self.filtered.len(), self.page_size)
    }

    /// Templates shown on the current page
    pub fn page_items(&self) -> &[TemplateRecord] {
        pagination::paginate(&self.filtered, self.page_size, self.current_page)
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.max(1);
        self.row_offset = 0;
        self.selected_index = navigation::clamp_selection(Some(0), self.page_items().len());
    }

    pub fn next_page(&mut self) {
        let next = pagination::next_page(self.current_page, self.page_count());
        if next != self.current_page {
            self.go_to_page(next);
        }
    }

    pub fn prev_page(&mut self) {
        let prev = pagination::prev_page(self.current_page);
        if prev != self.current_page {
            self.go_to_page(prev);
        }
    }

    /// Currently highlighted template
    pub fn selected_template(&self) -> Option<&TemplateRecord> {
        self.selected_index
            .and_then(|idx| self.page_items().get(idx))
    }
}
