//! Tile module - the shared tile collection and its ordering primitives
//!
//! Tiles are indexed by stable identity (their index at construction) and never
//! added or removed afterwards. Membership in the sentence is the `order` field:
//! `Some(rank)` for placed tiles, `None` for tiles in the bank.
//!
//! Invariant at rest: the placed orders are exactly `0..k` for `k` placed tiles.
//! Every mutation here re-densifies the whole placed sequence rather than
//! patching individual ranks.

use arrayvec::ArrayVec;

use crate::error::ExerciseError;
use crate::types::{LayoutConfig, Vector, MAX_TILES};

/// Identity indices of placed tiles, ascending by order.
pub type PlacedTiles = ArrayVec<usize, MAX_TILES>;

/// One word tile.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Rank in the sentence, `None` while in the bank
    pub order: Option<usize>,
    /// Measured width, fixed for the session
    pub width: f32,
    /// Layout position in the sentence area (written by layout only)
    pub x: f32,
    pub y: f32,
    /// Position in the bank grid, fixed at mount
    pub original_x: f32,
    pub original_y: f32,
}

impl Tile {
    pub fn new(width: f32, order: Option<usize>) -> Self {
        Self {
            order,
            width,
            x: 0.0,
            y: 0.0,
            original_x: 0.0,
            original_y: 0.0,
        }
    }

    pub fn with_original(mut self, original: Vector) -> Self {
        self.original_x = original.x;
        self.original_y = original.y;
        self
    }

    pub fn is_in_bank(&self) -> bool {
        self.order.is_none()
    }

    /// Order with the `-1` bank sentinel used by hosts and snapshots.
    pub fn order_value(&self) -> i32 {
        self.order.map_or(-1, |o| o as i32)
    }

    /// Current layout position in the sentence area.
    pub fn position(&self) -> Vector {
        Vector::new(self.x, self.y)
    }

    /// Bank grid position expressed in sentence-area coordinates.
    pub fn bank_position(&self, config: &LayoutConfig) -> Vector {
        Vector::new(
            self.original_x - config.margin_left,
            self.original_y + config.margin_top,
        )
    }

    /// Where the tile rests when nobody is dragging it.
    pub fn target_position(&self, config: &LayoutConfig) -> Vector {
        if self.is_in_bank() {
            self.bank_position(config)
        } else {
            self.position()
        }
    }
}

/// The tile collection of one exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSet {
    tiles: Vec<Tile>,
}

impl TileSet {
    /// Build a collection, validating capacity, widths and order density.
    pub fn new(tiles: Vec<Tile>) -> Result<Self, ExerciseError> {
        if tiles.len() > MAX_TILES {
            return Err(ExerciseError::TooManyTiles {
                count: tiles.len(),
                max: MAX_TILES,
            });
        }

        for (index, tile) in tiles.iter().enumerate() {
            if !tile.width.is_finite() || tile.width <= 0.0 {
                return Err(ExerciseError::InvalidWidth {
                    index,
                    width: tile.width,
                });
            }
        }

        let set = Self { tiles };
        if !set.is_order_dense() {
            return Err(ExerciseError::InvalidPlacement {
                orders: set.placed_orders(),
            });
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Mutable access for hosts. Callers that touch `order` own the density invariant.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    /// Number of placed tiles, which is also the order a tile entering from the bank gets.
    pub fn placed_count(&self) -> usize {
        self.tiles.iter().filter(|t| !t.is_in_bank()).count()
    }

    /// Placed tiles ascending by order.
    ///
    /// Equal orders can only appear when the invariant is already broken; they
    /// fall back to identity order so the result stays deterministic.
    pub fn sorted_placed(&self) -> PlacedTiles {
        let mut placed: PlacedTiles = self
            .tiles
            .iter()
            .enumerate()
            .filter_map(|(i, t)| t.order.map(|_| i))
            .collect();
        placed.sort_unstable_by_key(|&i| (self.tiles[i].order, i));
        placed
    }

    /// Placed orders ascending, for diagnostics.
    pub fn placed_orders(&self) -> Vec<usize> {
        let mut orders: Vec<usize> = self.tiles.iter().filter_map(|t| t.order).collect();
        orders.sort_unstable();
        orders
    }

    /// Check the dense order invariant (`0..k`, no gaps, no duplicates).
    pub fn is_order_dense(&self) -> bool {
        let count = self.placed_count();
        let mut seen = [false; MAX_TILES];
        for order in self.tiles.iter().filter_map(|t| t.order) {
            if order >= count || seen[order] {
                return false;
            }
            seen[order] = true;
        }
        true
    }

    /// Append a bank tile to the end of the sentence.
    ///
    /// Returns the new order, or `None` if the index is unknown. A tile that is
    /// already placed keeps its order.
    pub fn enter_sentence(&mut self, index: usize) -> Option<usize> {
        let count = self.placed_count();
        let tile = self.tiles.get_mut(index)?;
        match tile.order {
            Some(order) => Some(order),
            None => {
                tile.order = Some(count);
                Some(count)
            }
        }
    }

    /// Send the tile at `index` to the bank and compact the remaining orders.
    ///
    /// Relative order of the remaining placed tiles is preserved.
    /// Returns false if the index is out of bounds.
    pub fn remove_from_order(&mut self, index: usize) -> bool {
        if index >= self.tiles.len() {
            return false;
        }

        let placed = self.sorted_placed();
        self.tiles[index].order = None;

        let mut next = 0;
        for i in placed {
            if i == index {
                continue;
            }
            self.tiles[i].order = Some(next);
            next += 1;
        }
        true
    }

    /// Move the placed tile at order `from` to order `to`.
    ///
    /// Array-move semantics: tiles strictly between the two slots shift by one.
    /// Returns false (and changes nothing) if either order is out of range.
    pub fn move_order(&mut self, from: usize, to: usize) -> bool {
        let mut placed = self.sorted_placed();
        if from >= placed.len() || to >= placed.len() {
            return false;
        }

        let moved = placed.remove(from);
        placed.insert(to, moved);

        for (order, &i) in placed.iter().enumerate() {
            self.tiles[i].order = Some(order);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(orders: &[Option<usize>]) -> TileSet {
        TileSet::new(orders.iter().map(|&o| Tile::new(10.0, o)).collect()).unwrap()
    }

    fn orders(set: &TileSet) -> Vec<i32> {
        set.iter().map(Tile::order_value).collect()
    }

    #[test]
    fn test_new_rejects_gapped_orders() {
        let tiles = vec![Tile::new(10.0, Some(0)), Tile::new(10.0, Some(2))];
        assert_eq!(
            TileSet::new(tiles),
            Err(ExerciseError::InvalidPlacement { orders: vec![0, 2] })
        );
    }

    #[test]
    fn test_new_rejects_duplicate_orders() {
        let tiles = vec![Tile::new(10.0, Some(0)), Tile::new(10.0, Some(0))];
        assert!(TileSet::new(tiles).is_err());
    }

    #[test]
    fn test_new_rejects_bad_width() {
        let tiles = vec![Tile::new(0.0, None)];
        assert_eq!(
            TileSet::new(tiles),
            Err(ExerciseError::InvalidWidth {
                index: 0,
                width: 0.0
            })
        );
    }

    #[test]
    fn test_new_rejects_too_many_tiles() {
        let tiles = vec![Tile::new(10.0, None); MAX_TILES + 1];
        assert!(matches!(
            TileSet::new(tiles),
            Err(ExerciseError::TooManyTiles { .. })
        ));
    }

    #[test]
    fn test_sorted_placed_skips_bank() {
        let s = set(&[Some(2), None, Some(0), Some(1)]);
        assert_eq!(s.sorted_placed().as_slice(), &[2, 3, 0]);
        assert_eq!(s.placed_count(), 3);
    }

    #[test]
    fn test_remove_from_order_compacts_by_rank() {
        // Identity order differs from rank order on purpose.
        let mut s = set(&[Some(2), Some(0), Some(3), Some(1)]);
        assert!(s.remove_from_order(3));
        assert_eq!(orders(&s), vec![1, 0, 2, -1]);
        assert!(s.is_order_dense());
    }

    #[test]
    fn test_remove_from_order_out_of_bounds() {
        let mut s = set(&[Some(0)]);
        assert!(!s.remove_from_order(1));
        assert_eq!(orders(&s), vec![0]);
    }

    #[test]
    fn test_move_order_forward_and_back() {
        let mut s = set(&[Some(0), Some(1), Some(2), Some(3)]);
        assert!(s.move_order(0, 2));
        assert_eq!(orders(&s), vec![2, 0, 1, 3]);
        assert!(s.move_order(2, 0));
        assert_eq!(orders(&s), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_move_order_out_of_range_is_noop() {
        let mut s = set(&[Some(0), Some(1)]);
        assert!(!s.move_order(0, 2));
        assert_eq!(orders(&s), vec![0, 1]);
    }

    #[test]
    fn test_enter_sentence_appends() {
        let mut s = set(&[Some(0), None, Some(1)]);
        assert_eq!(s.enter_sentence(1), Some(2));
        assert_eq!(s.enter_sentence(0), Some(0));
        assert_eq!(s.enter_sentence(9), None);
        assert!(s.is_order_dense());
    }

    #[test]
    fn test_bank_position_applies_margins() {
        let config = LayoutConfig::default();
        let tile = Tile::new(40.0, None).with_original(Vector::new(50.0, 10.0));
        assert_eq!(
            tile.target_position(&config),
            Vector::new(50.0 - config.margin_left, 10.0 + config.margin_top)
        );
    }
}
