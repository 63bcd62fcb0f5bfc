//! Snapshot - a read-only, serializable picture of one exercise frame
//!
//! Views draw from a snapshot instead of borrowing the live exercise, and the
//! same value serializes to JSON for hosts outside the terminal.

use serde::Serialize;

use crate::types::{GesturePhase, LayoutConfig, Vector};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileSnapshot {
    pub word: String,
    /// Sentence rank, `-1` in the bank
    pub order: i32,
    pub width: f32,
    /// Layout position in the sentence area
    pub x: f32,
    pub y: f32,
    /// Bank slot in sentence-area coordinates
    pub bank: Vector,
    /// Where the host should draw the tile this frame
    pub display: Vector,
    pub phase: GesturePhase,
}

impl TileSnapshot {
    pub fn is_in_bank(&self) -> bool {
        self.order < 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseSnapshot {
    pub tiles: Vec<TileSnapshot>,
    pub container_width: f32,
    pub layout: LayoutConfig,
    pub active: Option<usize>,
    pub sentence: Vec<String>,
    /// Sentence lines holding at least one tile
    pub lines: u32,
    pub solved: bool,
}

impl ExerciseSnapshot {
    /// Tile indices back to front: resting tiles, then settling ones, then the dragged tile.
    pub fn draw_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.tiles.len()).collect();
        order.sort_by_key(|&i| match self.tiles[i].phase {
            GesturePhase::Idle => 0,
            GesturePhase::Settling => 1,
            GesturePhase::Dragging => 2,
        });
        order
    }
}
