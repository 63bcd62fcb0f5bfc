//! Gesture lifecycle of a single tile.
//!
//! Tracks the drag origin, the live translation fed into drag resolution, and
//! the displayed position the host draws. Drag resolution only ever runs while
//! a tile is `Dragging`.

use crate::types::{GestureConfig, GesturePhase, Vector};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGesture {
    phase: GesturePhase,
    /// Authoritative position captured at drag start
    origin: Vector,
    /// Live position: pointer-driven while dragging, animated otherwise
    translation: Vector,
}

impl TileGesture {
    /// A tile at rest on `position`.
    pub fn new(position: Vector) -> Self {
        Self {
            phase: GesturePhase::Idle,
            origin: position,
            translation: position,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    pub fn origin(&self) -> Vector {
        self.origin
    }

    /// Position to draw the tile at (and, while dragging, to resolve against).
    pub fn translation(&self) -> Vector {
        self.translation
    }

    /// Start dragging from the tile's authoritative position.
    pub fn begin(&mut self, origin: Vector) {
        self.phase = GesturePhase::Dragging;
        self.origin = origin;
        self.translation = origin;
    }

    /// Apply the raw pointer delta since the press. Ignored unless dragging.
    pub fn update(&mut self, delta: Vector) -> Vector {
        if self.is_dragging() {
            self.translation = self.origin + delta;
        }
        self.translation
    }

    /// Release the tile toward `target`.
    pub fn end(&mut self, target: Vector, config: &GestureConfig) {
        if !self.is_dragging() {
            return;
        }
        if (target - self.translation).length() <= config.snap_distance {
            self.translation = target;
            self.phase = GesturePhase::Idle;
        } else {
            self.phase = GesturePhase::Settling;
        }
    }

    /// Glide toward `target` for `elapsed_ms`.
    ///
    /// Exponential approach with `settle_time_constant_ms`. Settling tiles turn
    /// idle once they snap; idle tiles pushed around by a reflow glide too but
    /// keep their phase. Returns true while the tile is still moving.
    pub fn advance(&mut self, target: Vector, elapsed_ms: u32, config: &GestureConfig) -> bool {
        if self.is_dragging() {
            return false;
        }

        let remaining = target - self.translation;
        if remaining.length() <= config.snap_distance {
            self.translation = target;
            self.phase = GesturePhase::Idle;
            return false;
        }

        let t = if config.settle_time_constant_ms <= 0.0 {
            1.0
        } else {
            1.0 - (-(elapsed_ms as f32) / config.settle_time_constant_ms).exp()
        };
        self.translation = self.translation.lerp(target, t);

        if (target - self.translation).length() <= config.snap_distance {
            self.translation = target;
            self.phase = GesturePhase::Idle;
            return false;
        }
        true
    }
}
