//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - catalog: Manifest entries to template records, fallback list
//! - category: Filename category heuristics
//! - errors: Classification of fetch failures
//! - layout: Grid sizing and scrolling
//! - navigation: Grid selection movement
//! - pagination: Page slicing and page-button windows
//! - search: Substring filtering over name and category
//! - ui: Toasts and category shortcuts

pub mod catalog;
pub mod category;
pub mod errors;
pub mod layout;
pub mod navigation;
pub mod pagination;
pub mod search;
pub mod ui;
