//! App Orchestration Methods
//!
//! `impl App` blocks grouped by domain. Each method coordinates between
//! the pure Model (src/model/), the background services (src/services/),
//! and the selection handoff.

pub(crate) mod gallery;
pub(crate) mod preview;
