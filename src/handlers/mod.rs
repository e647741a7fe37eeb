//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - loader: Catalog results from the background loader
//! - preview: Image preview results
//! - handoff: Messages posted by the selection callbacks
//! - keyboard: User keyboard input
//!
//! Handlers are functions that take &mut App and process one event.

pub mod handoff;
pub mod keyboard;
pub mod loader;
pub mod preview;
