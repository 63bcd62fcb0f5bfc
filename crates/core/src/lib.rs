//! Core engine module - pure, deterministic, and testable
//!
//! This crate contains the geometry and ordering engine behind the "drag tiles
//! to build a sentence" exercise. It has **zero dependencies** on rendering,
//! input backends or I/O, making it:
//!
//! - **Deterministic**: Same orders and widths always produce the same positions
//! - **Testable**: Every rule is a plain function over a `TileSet`
//! - **Portable**: Runs behind a terminal, a GUI or headless tests
//! - **Allocation-free per frame**: Drag resolution works on stack buffers
//!
//! # Module Structure
//!
//! - [`tile`]: Tile records, the tile collection and its order primitives
//! - [`layout`]: Greedy line wrapping of the placed tiles
//! - [`bank`]: Fixed bank grid positions
//! - [`drag`]: Center-of-mass crossing tests and per-frame drag resolution
//! - [`gesture`]: Per-tile Idle/Dragging/Settling lifecycle
//! - [`exercise`]: Host-facing session owner wiring all of the above
//! - [`snapshot`]: Serializable view of an exercise for renderers
//! - [`error`]: Error types
//!
//! # Rules
//!
//! - **Dense orders**: placed tiles always carry orders `0..k`
//! - **Greedy wrap**: a tile that would overflow the container starts a new line
//! - **Bank threshold**: `(number_of_lines - 1) * word_height` on the drag's `y`
//! - **Crossing**: a neighbour is passed once the dragged edge reaches its midpoint
//!   while both share a line band
//! - **Farthest wins**: the farthest crossed neighbour becomes the new slot
//!
//! # Example
//!
//! ```
//! use word_tiles_core::{compute_layout, resolve_drag_frame, FrameOutcome, Tile, TileSet};
//! use word_tiles_core::types::{LayoutConfig, Vector};
//!
//! let config = LayoutConfig::default();
//! let mut tiles = TileSet::new(vec![
//!     Tile::new(40.0, Some(0)),
//!     Tile::new(60.0, Some(1)),
//!     Tile::new(50.0, Some(2)),
//! ])
//! .unwrap();
//! compute_layout(&mut tiles, 120.0, &config);
//! assert_eq!(tiles.get(2).unwrap().y, config.word_height);
//!
//! // Drag the first tile right until its trailing edge covers the second's midpoint.
//! let outcome = resolve_drag_frame(&mut tiles, 0, Vector::new(40.0, 0.0), 120.0, &config).unwrap();
//! assert_eq!(outcome, FrameOutcome::Reordered { from: 0, to: 1 });
//! assert_eq!(tiles.get(0).unwrap().order, Some(1));
//! ```

pub mod bank;
pub mod drag;
pub mod error;
pub mod exercise;
pub mod gesture;
pub mod layout;
pub mod snapshot;
pub mod tile;

pub use word_tiles_types as types;

// Re-export commonly used types for convenience
pub use bank::{bank_grid, layout_bank};
pub use drag::{
    is_after_center_of_mass, is_before_center_of_mass, is_beyond_center_of_mass,
    resolve_drag_frame, FrameOutcome,
};
pub use error::{DragError, ExerciseError};
pub use exercise::{Exercise, ExerciseDef};
pub use gesture::TileGesture;
pub use layout::{compute_layout, line_count, pack_lines};
pub use snapshot::{ExerciseSnapshot, TileSnapshot};
pub use tile::{PlacedTiles, Tile, TileSet};
