//! Drag resolution - decides bank transitions and reorders for one drag sample
//!
//! Every tile's bounding-box midpoint is its "center of mass". While a placed
//! tile is dragged, each other placed tile on the same line band is tested:
//!
//! - a tile **after** the dragged one (higher order) is crossed once the dragged
//!   tile's trailing edge reaches its midpoint;
//! - a tile **before** the dragged one (lower order) is crossed once the dragged
//!   tile's leading edge reaches back to its midpoint.
//!
//! The farthest crossed tile becomes the reordering subject. Crossing tiles in
//! both directions in one frame cannot happen with a consistent layout and is
//! reported as [`DragError::ConflictingCrossings`].
//!
//! Bank transitions take priority over reordering: a bank tile moved above the
//! sentence threshold is appended to the sentence, and a placed tile moved below
//! it goes back to the bank.

use arrayvec::ArrayVec;
use tracing::{debug, error};

use crate::error::DragError;
use crate::layout::compute_layout;
use crate::tile::{Tile, TileSet};
use crate::types::{LayoutConfig, Vector, MAX_TILES};

/// What one drag sample did to the tile collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Nothing changed
    Unchanged,
    /// A bank tile was appended to the sentence at `order`
    EnteredSentence { order: usize },
    /// A placed tile was evicted to the bank
    ReturnedToBank,
    /// The dragged tile moved from order `from` to order `to`
    Reordered { from: usize, to: usize },
}

/// Core crossing predicate.
///
/// Horizontal: with `inverse` the dragged box's leading edge must be at or left
/// of the candidate midpoint, otherwise its trailing edge must be at or right of
/// it. Vertical: the dragged box's midpoint must lie within the candidate's line
/// band (inclusive), so tiles on other lines never trigger.
pub fn is_beyond_center_of_mass(
    translation: Vector,
    dragged_width: f32,
    candidate: &Tile,
    inverse: bool,
    word_height: f32,
) -> bool {
    let candidate_mid_x = (candidate.x * 2.0 + candidate.width) / 2.0;

    let is_beyond_x = if inverse {
        translation.x <= candidate_mid_x
    } else {
        translation.x + dragged_width >= candidate_mid_x
    };

    let dragged_mid_y = (translation.y * 2.0 + word_height) / 2.0;
    let in_band = dragged_mid_y >= candidate.y && dragged_mid_y <= candidate.y + word_height;

    is_beyond_x && in_band
}

/// The dragged tile precedes `candidate` and its trailing edge passed the candidate's midpoint.
pub fn is_after_center_of_mass(
    dragged: &Tile,
    candidate: &Tile,
    translation: Vector,
    word_height: f32,
) -> bool {
    match (dragged.order, candidate.order) {
        (Some(d), Some(c)) if d < c => {
            is_beyond_center_of_mass(translation, dragged.width, candidate, false, word_height)
        }
        _ => false,
    }
}

/// The dragged tile follows `candidate` and its leading edge passed back over the candidate's midpoint.
pub fn is_before_center_of_mass(
    dragged: &Tile,
    candidate: &Tile,
    translation: Vector,
    word_height: f32,
) -> bool {
    match (dragged.order, candidate.order) {
        (Some(d), Some(c)) if d > c => {
            is_beyond_center_of_mass(translation, dragged.width, candidate, true, word_height)
        }
        _ => false,
    }
}

/// Resolve one drag sample for the tile at `index` with live `translation`.
///
/// Mutates orders and layout in place and reports what happened.
pub fn resolve_drag_frame(
    tiles: &mut TileSet,
    index: usize,
    translation: Vector,
    container_width: f32,
    config: &LayoutConfig,
) -> Result<FrameOutcome, DragError> {
    let len = tiles.len();
    let order = tiles
        .get(index)
        .ok_or(DragError::UnknownTile { index, len })?
        .order;
    let threshold = config.sentence_height();

    match order {
        None => {
            if translation.y >= threshold {
                return Ok(FrameOutcome::Unchanged);
            }
            let order = tiles
                .enter_sentence(index)
                .ok_or(DragError::UnknownTile { index, len })?;
            compute_layout(tiles, container_width, config);
            debug!(tile = index, order, "tile entered sentence");
            Ok(FrameOutcome::EnteredSentence { order })
        }
        Some(order) if translation.y > threshold => {
            tiles.remove_from_order(index);
            compute_layout(tiles, container_width, config);
            debug!(tile = index, order, "tile returned to bank");
            Ok(FrameOutcome::ReturnedToBank)
        }
        Some(order) => reorder(tiles, index, order, translation, container_width, config),
    }
}

fn reorder(
    tiles: &mut TileSet,
    index: usize,
    order: usize,
    translation: Vector,
    container_width: f32,
    config: &LayoutConfig,
) -> Result<FrameOutcome, DragError> {
    let placed = tiles.sorted_placed();
    let slots = tiles.tiles();

    let dense = placed
        .iter()
        .enumerate()
        .all(|(rank, &i)| slots[i].order == Some(rank));
    if !dense {
        let orders = tiles.placed_orders();
        error!(tile = index, ?orders, "placed orders are not dense");
        return Err(DragError::OrderNotDense { orders });
    }

    let dragged = &slots[index];
    let mut after: ArrayVec<usize, MAX_TILES> = ArrayVec::new();
    let mut before: ArrayVec<usize, MAX_TILES> = ArrayVec::new();

    for &i in &placed {
        if i == index {
            continue;
        }
        let candidate = &slots[i];
        let Some(candidate_order) = candidate.order else {
            continue;
        };

        if is_after_center_of_mass(dragged, candidate, translation, config.word_height) {
            after.push(candidate_order);
        } else if is_before_center_of_mass(dragged, candidate, translation, config.word_height) {
            before.push(candidate_order);
        }
    }

    if !after.is_empty() && !before.is_empty() {
        error!(
            tile = index,
            before = ?before.as_slice(),
            after = ?after.as_slice(),
            "conflicting center of mass crossings"
        );
        return Err(DragError::ConflictingCrossings {
            dragged: index,
            before: before.to_vec(),
            after: after.to_vec(),
        });
    }

    let subject = match (after.iter().max(), before.iter().min()) {
        (Some(&farthest), _) => farthest,
        (None, Some(&farthest)) => farthest,
        (None, None) => return Ok(FrameOutcome::Unchanged),
    };

    tiles.move_order(order, subject);
    compute_layout(tiles, container_width, config);
    debug!(tile = index, from = order, to = subject, "tile reordered");
    Ok(FrameOutcome::Reordered {
        from: order,
        to: subject,
    })
}
