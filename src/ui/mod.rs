// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Splits the gallery screen into its areas
// - render: Main orchestration function that coordinates all rendering
// - home: The screen the gallery returns to after a selection
// - header: Title bar with result and category counts
// - search: Search input box with query and match count
// - categories: "All" + category shortcut row
// - grid: Template grid for the current page
// - pagination: Previous / numbered / Next page bar
// - preview: Image preview of the highlighted template
// - legend: Hotkey legend
// - status_bar: Catalog source and page position
// - toast: Brief pop-up messages

pub mod categories;
pub mod grid;
pub mod header;
pub mod home;
pub mod layout;
pub mod legend;
pub mod pagination;
pub mod preview;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod toast;

pub use render::render;
