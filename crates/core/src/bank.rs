//! Bank grid - fixed home positions of every tile
//!
//! The bank shows every word of the exercise in identity order, wrapped like a
//! flex row inside a container inset by `margin_left`. A tile keeps its bank
//! slot for the whole session even while it sits in the sentence, so the slot
//! can be drawn as a placeholder.

use crate::layout::pack_lines;
use crate::tile::TileSet;
use crate::types::{LayoutConfig, Vector};

/// Bank grid positions (`original_x`, `original_y`) for the given widths.
pub fn bank_grid(widths: &[f32], bank_width: f32, config: &LayoutConfig) -> Vec<Vector> {
    let mut grid = vec![Vector::ZERO; widths.len()];
    pack_lines(
        widths.iter().copied(),
        bank_width,
        config.word_height,
        |i, pos| {
            grid[i] = Vector::new(pos.x + config.margin_left, pos.y);
        },
    );
    grid
}

/// Write bank grid positions into every tile of the set.
pub fn layout_bank(tiles: &mut TileSet, bank_width: f32, config: &LayoutConfig) {
    let widths: Vec<f32> = tiles.iter().map(|t| t.width).collect();
    let grid = bank_grid(&widths, bank_width, config);
    for (tile, pos) in tiles.tiles_mut().iter_mut().zip(grid) {
        tile.original_x = pos.x;
        tile.original_y = pos.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;

    #[test]
    fn test_bank_grid_wraps_and_insets() {
        let config = LayoutConfig::default();
        let grid = bank_grid(&[50.0, 50.0, 50.0], 120.0, &config);
        assert_eq!(grid[0], Vector::new(config.margin_left, 0.0));
        assert_eq!(grid[1], Vector::new(config.margin_left + 50.0, 0.0));
        assert_eq!(grid[2], Vector::new(config.margin_left, config.word_height));
    }

    #[test]
    fn test_bank_position_round_trips_margin() {
        let config = LayoutConfig::default();
        let mut tiles =
            TileSet::new(vec![Tile::new(50.0, None), Tile::new(30.0, Some(0))]).unwrap();
        layout_bank(&mut tiles, 120.0, &config);

        // Bank slots are assigned to placed tiles too.
        let second = tiles.get(1).unwrap();
        assert_eq!(
            second.bank_position(&config),
            Vector::new(50.0, config.margin_top)
        );
    }
}
