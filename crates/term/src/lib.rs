//! Terminal rendering module for the word tiles exercise.
//!
//! A small, game-oriented rendering layer: views paint an
//! [`ExerciseSnapshot`](crate::core::ExerciseSnapshot) into a plain framebuffer,
//! and the renderer repaints only the changed span of each row.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep views pure (no I/O) so they can be unit-tested
//! - Map engine units to cells 1:1 so drag geometry is what you see

pub mod fb;
pub mod renderer;
pub mod sentence_view;

pub use word_tiles_core as core;
pub use word_tiles_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_frame, TerminalRenderer};
pub use sentence_view::{measure_word, SentenceView, Viewport};
