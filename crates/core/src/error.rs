//! Error types for the tile engine.
//!
//! Only the drag path can fail at runtime, and only in two ways that matter:
//! the geometry reports crossings in both directions at once, or the placed
//! orders are no longer dense. Both mean upstream state is corrupt and are
//! propagated to the host instead of being resolved silently.

use thiserror::Error;

/// Failure while resolving a drag frame or driving a gesture.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DragError {
    #[error(
        "tile {dragged} is moving against centers of mass before {before:?} and after {after:?} it at the same time"
    )]
    ConflictingCrossings {
        dragged: usize,
        before: Vec<usize>,
        after: Vec<usize>,
    },

    #[error("placed tile orders are not dense: {orders:?}")]
    OrderNotDense { orders: Vec<usize> },

    #[error("tile index {index} out of range ({len} tiles)")]
    UnknownTile { index: usize, len: usize },

    #[error("tile {active} is already being dragged")]
    DragInProgress { active: usize },
}

impl DragError {
    /// Whether this error reports corrupted engine state rather than host misuse.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            DragError::ConflictingCrossings { .. } | DragError::OrderNotDense { .. }
        )
    }
}

/// Failure while building an exercise or tile set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExerciseError {
    #[error("exercise has no words")]
    NoWords,

    #[error("exercise has {count} tiles, at most {max} are supported")]
    TooManyTiles { count: usize, max: usize },

    #[error("tile {index} has invalid width {width}")]
    InvalidWidth { index: usize, width: f32 },

    #[error("placed tiles must have dense orders 0..k, got {orders:?}")]
    InvalidPlacement { orders: Vec<usize> },

    #[error("solution must reference distinct word indices, got {solution:?}")]
    InvalidSolution { solution: Vec<usize> },
}
