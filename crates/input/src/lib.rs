//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` mouse and key events into plain [`crate::types::PointerEvent`]s
//! and provides a pointer tracker that turns press/drag/release sequences into
//! drag deltas in engine units.

pub mod handler;
pub mod map;

pub use word_tiles_types as types;

pub use handler::PointerTracker;
pub use map::{pointer_event, should_quit, should_reset};
