//! Meme Template Gallery Library
//!
//! Exposes the catalog, filter and manifest modules to the `memegallery`
//! TUI, the `build-manifest` step, and the integration tests.

use std::sync::atomic::{AtomicBool, Ordering};

pub mod api;
pub mod config;
pub mod logic;
pub mod manifest;
pub mod model;
pub mod selection;
pub mod services;
pub mod utils;

/// Global flag for debug mode (set once from `--debug`)
pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Append a line to the debug log file
///
/// No-op unless debug mode is enabled. The terminal belongs to the TUI, so
/// diagnostics never go to stdout/stderr.
pub fn log_debug(msg: &str) {
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(
            file,
            "[{}] {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            msg
        );
    }
}
