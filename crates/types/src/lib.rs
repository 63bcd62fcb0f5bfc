//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data with no behavior beyond small conversions,
//! making it usable in any context (engine, terminal view, input mapping).
//!
//! # Coordinate Space
//!
//! All engine positions are `f32` offsets inside the sentence area:
//!
//! - **x** grows to the right, starting at the left edge of the sentence area
//! - **y** grows downward, starting at the top of the first sentence line
//! - The bank sits below the sentence area, `margin_top` units down
//!
//! The engine is unit-agnostic. The defaults below are pixels; the terminal
//! host uses character cells.
//!
//! # Layout Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WORD_HEIGHT` | 55 | Height of one sentence line |
//! | `NUMBER_OF_LINES` | 3 | Visible sentence lines |
//! | `MARGIN_TOP` | 150 | Vertical offset from sentence origin to the bank |
//! | `MARGIN_LEFT` | 32 | Horizontal inset of the bank container |
//! | `MAX_TILES` | 64 | Tile capacity of one exercise |
//!
//! The bank threshold is `SENTENCE_HEIGHT = (NUMBER_OF_LINES - 1) * WORD_HEIGHT`:
//! a dragged tile above it belongs to the sentence, below it to the bank.
//!
//! # Examples
//!
//! ```
//! use word_tiles_types::{GesturePhase, LayoutConfig, Vector, SENTENCE_HEIGHT};
//!
//! let config = LayoutConfig::default();
//! assert_eq!(config.sentence_height(), SENTENCE_HEIGHT);
//!
//! let p = Vector::new(10.0, 20.0) + Vector::new(5.0, -5.0);
//! assert_eq!(p, Vector::new(15.0, 15.0));
//!
//! assert_eq!(GesturePhase::from_str("settling"), Some(GesturePhase::Settling));
//! ```

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Height of one sentence line (55px)
pub const WORD_HEIGHT: f32 = 55.0;

/// Number of visible sentence lines
pub const NUMBER_OF_LINES: u32 = 3;

/// Offset from the sentence origin down to the bank container (150px)
pub const MARGIN_TOP: f32 = 150.0;

/// Horizontal inset of the bank container (32px)
pub const MARGIN_LEFT: f32 = 32.0;

/// Bank/sentence threshold for the default layout (110px)
pub const SENTENCE_HEIGHT: f32 = (NUMBER_OF_LINES - 1) as f32 * WORD_HEIGHT;

/// Maximum number of tiles in one exercise.
///
/// Per-frame scratch buffers are sized by this, so drag resolution never allocates.
pub const MAX_TILES: usize = 64;

/// Time constant of the settle animation in milliseconds.
pub const SETTLE_TIME_CONSTANT_MS: f32 = 60.0;

/// Distance under which a settling tile snaps onto its target.
pub const SNAP_DISTANCE: f32 = 0.5;


/// A 2D point or offset in sentence-area coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Linear interpolation toward `to` by factor `t` (0 = self, 1 = to)
    pub fn lerp(self, to: Vector, t: f32) -> Self {
        Self {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Fixed layout metrics shared by the layout and drag engines.
///
/// Every engine entry point takes this explicitly so the same code runs at
/// pixel scale (defaults) and at terminal-cell scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of one sentence line
    pub word_height: f32,
    /// Visible sentence lines
    pub number_of_lines: u32,
    /// Offset from the sentence origin down to the bank container
    pub margin_top: f32,
    /// Horizontal inset of the bank container
    pub margin_left: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            word_height: WORD_HEIGHT,
            number_of_lines: NUMBER_OF_LINES,
            margin_top: MARGIN_TOP,
            margin_left: MARGIN_LEFT,
        }
    }
}

impl LayoutConfig {
    /// Bank/sentence threshold on the dragged tile's `y` translation.
    pub fn sentence_height(&self) -> f32 {
        self.number_of_lines.saturating_sub(1) as f32 * self.word_height
    }
}

/// Settle animation tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub settle_time_constant_ms: f32,
    pub snap_distance: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            settle_time_constant_ms: SETTLE_TIME_CONSTANT_MS,
            snap_distance: SNAP_DISTANCE,
        }
    }
}

/// Per-tile gesture lifecycle
///
/// - **Idle**: at rest on its authoritative position
/// - **Dragging**: following the pointer, fed into drag resolution every sample
/// - **Settling**: released, gliding toward its authoritative position
///
/// The cycle goes: Idle → Dragging → Settling → Idle (or Dragging → Idle when
/// released exactly on target).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    Settling,
}

impl GesturePhase {
    /// Parse phase from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use word_tiles_types::GesturePhase;
    ///
    /// assert_eq!(GesturePhase::from_str("IDLE"), Some(GesturePhase::Idle));
    /// assert_eq!(GesturePhase::from_str("dragging"), Some(GesturePhase::Dragging));
    /// assert_eq!(GesturePhase::from_str("flying"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "idle" => Some(GesturePhase::Idle),
            "dragging" => Some(GesturePhase::Dragging),
            "settling" => Some(GesturePhase::Settling),
            _ => None,
        }
    }

    /// Whether the tile should be drawn above its neighbours
    pub fn is_elevated(&self) -> bool {
        !matches!(self, GesturePhase::Idle)
    }
}

/// Raw pointer sample in terminal cells, decoupled from any input backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Press { column: u16, row: u16 },
    Drag { column: u16, row: u16 },
    Release { column: u16, row: u16 },
}

/// Gesture-level action derived from pointer events.
///
/// `Begin` carries the pressed cell; `Move` carries the accumulated delta since
/// the press, already scaled to engine units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    Begin { column: u16, row: u16 },
    Move(Vector),
    End,
}
