//! Background Services
//!
//! Async work that runs outside the UI loop and reports back over channels:
//! - loader: One catalog load per gallery activation, with fallback
//! - preview: Per-template image fetch and decode, with placeholder fallback

pub mod loader;
pub mod preview;
