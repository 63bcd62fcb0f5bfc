//! Layout module - greedy line wrapping of the placed tiles
//!
//! Placed tiles are packed left to right in ascending order, contiguous, with no
//! gaps and no justification. A tile that would overflow the container width
//! starts a new line at `x = 0`. Lines are `word_height` apart and never resize
//! to their content.
//!
//! The pass is single and greedy: a running width accumulator is reset at every
//! line break, which yields the same positions as re-summing the current line
//! for each tile.

use arrayvec::ArrayVec;

use crate::tile::TileSet;
use crate::types::{LayoutConfig, Vector, MAX_TILES};

/// Pack a sequence of widths into lines.
///
/// Calls `place(i, position)` for the `i`-th width in iteration order. Shared by
/// the sentence layout and the bank grid.
pub fn pack_lines<I, F>(widths: I, container_width: f32, line_height: f32, mut place: F)
where
    I: IntoIterator<Item = f32>,
    F: FnMut(usize, Vector),
{
    let mut line_number = 0u32;
    let mut total = 0.0f32;

    for (i, width) in widths.into_iter().enumerate() {
        let x = if total + width > container_width {
            line_number += 1;
            total = 0.0;
            0.0
        } else {
            total
        };
        total += width;
        place(i, Vector::new(x, line_number as f32 * line_height));
    }
}

/// Recompute `x`/`y` of every placed tile.
///
/// Bank tiles are left untouched. Returns immediately when nothing is placed.
pub fn compute_layout(tiles: &mut TileSet, container_width: f32, config: &LayoutConfig) {
    let placed = tiles.sorted_placed();
    if placed.is_empty() {
        return;
    }

    let slots = tiles.tiles_mut();
    let widths: ArrayVec<f32, MAX_TILES> = placed.iter().map(|&i| slots[i].width).collect();
    pack_lines(widths, container_width, config.word_height, |n, pos| {
        let tile = &mut slots[placed[n]];
        tile.x = pos.x;
        tile.y = pos.y;
    });
}

/// Number of sentence lines the current layout occupies.
pub fn line_count(tiles: &TileSet, config: &LayoutConfig) -> u32 {
    tiles
        .iter()
        .filter(|t| !t.is_in_bank())
        .map(|t| (t.y / config.word_height).round() as u32 + 1)
        .max()
        .unwrap_or(0)
}
