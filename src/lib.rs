//! Word tiles (workspace facade crate).
//!
//! Re-exports the engine, input, terminal and shared-type crates under stable
//! `word_tiles::{core,input,term,types}` paths, and carries the binary's
//! environment configuration and frame pacing.

pub mod clock;
pub mod config;

pub use word_tiles_core as core;
pub use word_tiles_input as input;
pub use word_tiles_term as term;
pub use word_tiles_types as types;
