//! Layout and ordering tests - greedy wrap, move and eviction semantics

use word_tiles::core::{bank_grid, compute_layout, layout_bank, line_count, Tile, TileSet};
use word_tiles::types::{LayoutConfig, Vector};

fn placed(widths: &[f32]) -> TileSet {
    TileSet::new(
        widths
            .iter()
            .enumerate()
            .map(|(i, &w)| Tile::new(w, Some(i)))
            .collect(),
    )
    .unwrap()
}

fn positions(tiles: &TileSet) -> Vec<Vector> {
    tiles.iter().map(Tile::position).collect()
}

fn sentence(tiles: &TileSet) -> Vec<usize> {
    tiles.sorted_placed().to_vec()
}

#[test]
fn test_three_tiles_wrap_onto_second_line() {
    let config = LayoutConfig::default();
    let mut tiles = placed(&[40.0, 60.0, 50.0]);
    compute_layout(&mut tiles, 120.0, &config);

    assert_eq!(
        positions(&tiles),
        vec![
            Vector::new(0.0, 0.0),
            Vector::new(40.0, 0.0),
            Vector::new(0.0, 55.0),
        ]
    );
    assert_eq!(line_count(&tiles, &config), 2);
}

#[test]
fn test_layout_follows_order_not_identity() {
    let config = LayoutConfig::default();
    let mut tiles = TileSet::new(vec![
        Tile::new(40.0, Some(1)),
        Tile::new(60.0, Some(2)),
        Tile::new(50.0, Some(0)),
    ])
    .unwrap();
    compute_layout(&mut tiles, 120.0, &config);

    // Sequence is 50, 40, 60: the third no longer fits after 90.
    assert_eq!(tiles.get(2).unwrap().position(), Vector::new(0.0, 0.0));
    assert_eq!(tiles.get(0).unwrap().position(), Vector::new(50.0, 0.0));
    assert_eq!(tiles.get(1).unwrap().position(), Vector::new(0.0, 55.0));
}

#[test]
fn test_tile_ending_exactly_at_edge_stays_on_line() {
    let mut tiles = placed(&[60.0, 60.0]);
    compute_layout(&mut tiles, 120.0, &LayoutConfig::default());
    assert_eq!(tiles.get(1).unwrap().position(), Vector::new(60.0, 0.0));
}

#[test]
fn test_custom_word_height_spaces_lines() {
    let config = LayoutConfig {
        word_height: 3.0,
        ..LayoutConfig::default()
    };
    let mut tiles = placed(&[10.0, 10.0, 10.0]);
    compute_layout(&mut tiles, 15.0, &config);
    assert_eq!(
        positions(&tiles),
        vec![
            Vector::new(0.0, 0.0),
            Vector::new(0.0, 3.0),
            Vector::new(0.0, 6.0),
        ]
    );
}

#[test]
fn test_move_last_to_front() {
    let mut tiles = placed(&[40.0, 60.0, 50.0]);
    assert!(tiles.move_order(2, 0));
    assert_eq!(sentence(&tiles), vec![2, 0, 1]);
    assert!(tiles.is_order_dense());
}

#[test]
fn test_move_front_to_back() {
    let mut tiles = placed(&[10.0, 10.0, 10.0, 10.0]);
    assert!(tiles.move_order(0, 3));
    assert_eq!(sentence(&tiles), vec![1, 2, 3, 0]);
}

#[test]
fn test_move_out_of_range_is_noop() {
    let mut tiles = placed(&[10.0, 10.0]);
    assert!(!tiles.move_order(0, 2));
    assert!(!tiles.move_order(5, 0));
    assert_eq!(sentence(&tiles), vec![0, 1]);
}

#[test]
fn test_remove_from_middle_compacts() {
    let mut tiles = placed(&[10.0, 20.0, 30.0, 40.0]);
    assert!(tiles.remove_from_order(1));

    assert!(tiles.get(1).unwrap().is_in_bank());
    assert_eq!(sentence(&tiles), vec![0, 2, 3]);
    assert_eq!(tiles.placed_orders(), vec![0, 1, 2]);

    compute_layout(&mut tiles, 1000.0, &LayoutConfig::default());
    assert_eq!(tiles.get(2).unwrap().position(), Vector::new(10.0, 0.0));
    assert_eq!(tiles.get(3).unwrap().position(), Vector::new(40.0, 0.0));
}

#[test]
fn test_bank_tile_appends_at_end() {
    let mut tiles = TileSet::new(vec![
        Tile::new(10.0, Some(0)),
        Tile::new(10.0, None),
        Tile::new(10.0, Some(1)),
    ])
    .unwrap();
    assert_eq!(tiles.enter_sentence(1), Some(2));
    assert_eq!(sentence(&tiles), vec![0, 2, 1]);
}

#[test]
fn test_bank_grid_is_independent_of_sentence() {
    let config = LayoutConfig::default();
    let mut tiles = TileSet::new(vec![
        Tile::new(50.0, Some(0)),
        Tile::new(50.0, None),
        Tile::new(50.0, None),
    ])
    .unwrap();
    layout_bank(&mut tiles, 120.0, &config);

    let grid = bank_grid(&[50.0, 50.0, 50.0], 120.0, &config);
    for (tile, slot) in tiles.iter().zip(&grid) {
        assert_eq!(Vector::new(tile.original_x, tile.original_y), *slot);
    }
    assert_eq!(
        tiles.get(2).unwrap().bank_position(&config),
        Vector::new(0.0, config.word_height + config.margin_top)
    );
}
