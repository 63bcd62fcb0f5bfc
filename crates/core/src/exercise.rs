//! Exercise - the host-facing owner of one sentence-building session
//!
//! Owns the words, the tile collection and one gesture per tile, and wires
//! pointer-level calls (`drag_start`, `drag_move`, `drag_end`) into drag
//! resolution and layout. At most one tile is dragged at a time.
//!
//! # Example
//!
//! ```
//! use word_tiles_core::{Exercise, ExerciseDef, FrameOutcome};
//! use word_tiles_core::types::{LayoutConfig, Vector};
//!
//! let def = ExerciseDef::from_words(&["the", "cat", "sleeps"]);
//! let mut exercise =
//!     Exercise::new(&def, |w| w.len() as f32 * 10.0, 300.0, LayoutConfig::default()).unwrap();
//!
//! // Drag "cat" up out of the bank into the sentence.
//! exercise.drag_start(1).unwrap();
//! let outcome = exercise.drag_move(Vector::new(0.0, -200.0)).unwrap();
//! assert_eq!(outcome, FrameOutcome::EnteredSentence { order: 0 });
//! exercise.drag_end();
//!
//! assert_eq!(exercise.sentence(), vec!["cat"]);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::bank::layout_bank;
use crate::drag::{resolve_drag_frame, FrameOutcome};
use crate::error::{DragError, ExerciseError};
use crate::gesture::TileGesture;
use crate::layout::{compute_layout, line_count};
use crate::snapshot::{ExerciseSnapshot, TileSnapshot};
use crate::tile::{Tile, TileSet};
use crate::types::{GestureConfig, LayoutConfig, Vector};

/// Declarative exercise content, loadable from JSON.
///
/// Layout metrics are not part of the file: they belong to the host that
/// measures the words, so unknown keys such as `layout` are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExerciseDef {
    pub words: Vec<String>,
    /// Word indices already in the sentence, in order
    #[serde(default)]
    pub placed: Vec<usize>,
    /// Word indices of the expected sentence
    #[serde(default)]
    pub solution: Option<Vec<usize>>,
}

impl ExerciseDef {
    /// All words start in the bank, no solution.
    pub fn from_words(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
            placed: Vec::new(),
            solution: None,
        }
    }

    pub fn with_solution(mut self, solution: Vec<usize>) -> Self {
        self.solution = Some(solution);
        self
    }

    pub fn with_placed(mut self, placed: Vec<usize>) -> Self {
        self.placed = placed;
        self
    }

    fn validate(&self) -> Result<(), ExerciseError> {
        if self.words.is_empty() {
            return Err(ExerciseError::NoWords);
        }
        if !distinct_indices(&self.placed, self.words.len()) {
            return Err(ExerciseError::InvalidPlacement {
                orders: self.placed.clone(),
            });
        }
        if let Some(solution) = &self.solution {
            if solution.is_empty() || !distinct_indices(solution, self.words.len()) {
                return Err(ExerciseError::InvalidSolution {
                    solution: solution.clone(),
                });
            }
        }
        Ok(())
    }
}

fn distinct_indices(indices: &[usize], len: usize) -> bool {
    let mut seen = vec![false; len];
    indices.iter().all(|&i| {
        if i >= len || seen[i] {
            return false;
        }
        seen[i] = true;
        true
    })
}

#[derive(Debug, Clone)]
pub struct Exercise {
    words: Vec<String>,
    solution: Option<Vec<usize>>,
    tiles: TileSet,
    gestures: Vec<TileGesture>,
    active: Option<usize>,
    container_width: f32,
    layout: LayoutConfig,
    gesture_config: GestureConfig,
}

impl Exercise {
    /// Mount an exercise: measure every word, pack the bank, lay out the sentence.
    pub fn new<F>(
        def: &ExerciseDef,
        measure: F,
        container_width: f32,
        layout: LayoutConfig,
    ) -> Result<Self, ExerciseError>
    where
        F: Fn(&str) -> f32,
    {
        def.validate()?;

        let mut orders = vec![None; def.words.len()];
        for (order, &word) in def.placed.iter().enumerate() {
            orders[word] = Some(order);
        }

        let tiles = def
            .words
            .iter()
            .zip(orders)
            .map(|(word, order)| Tile::new(measure(word), order))
            .collect();

        let mut exercise = Self {
            words: def.words.clone(),
            solution: def.solution.clone(),
            tiles: TileSet::new(tiles)?,
            gestures: Vec::new(),
            active: None,
            container_width,
            layout,
            gesture_config: GestureConfig::default(),
        };
        exercise.mount();

        info!(
            words = exercise.words.len(),
            placed = exercise.tiles.placed_count(),
            container_width,
            "exercise mounted"
        );
        Ok(exercise)
    }

    fn mount(&mut self) {
        layout_bank(&mut self.tiles, self.container_width, &self.layout);
        compute_layout(&mut self.tiles, self.container_width, &self.layout);
        self.gestures = self
            .tiles
            .iter()
            .map(|t| TileGesture::new(t.target_position(&self.layout)))
            .collect();
    }

    pub fn tiles(&self) -> &TileSet {
        &self.tiles
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    /// Index of the tile being dragged, if any.
    pub fn active_tile(&self) -> Option<usize> {
        self.active
    }

    pub fn gesture(&self, index: usize) -> Option<&TileGesture> {
        self.gestures.get(index)
    }

    /// Remount at a new container width. Ends any drag in progress.
    pub fn resize(&mut self, container_width: f32) {
        if self.container_width == container_width {
            return;
        }
        debug!(from = self.container_width, to = container_width, "exercise resized");
        self.container_width = container_width;
        self.active = None;
        self.mount();
    }

    /// Capture the tile's authoritative position as the drag origin.
    pub fn drag_start(&mut self, index: usize) -> Result<(), DragError> {
        if let Some(active) = self.active {
            return Err(DragError::DragInProgress { active });
        }
        let tile = self.tiles.get(index).ok_or(DragError::UnknownTile {
            index,
            len: self.tiles.len(),
        })?;

        let origin = tile.target_position(&self.layout);
        self.gestures[index].begin(origin);
        self.active = Some(index);
        debug!(tile = index, word = %self.words[index], "drag started");
        Ok(())
    }

    /// Feed the pointer delta since the press and resolve the frame.
    pub fn drag_move(&mut self, delta: Vector) -> Result<FrameOutcome, DragError> {
        let Some(index) = self.active else {
            return Ok(FrameOutcome::Unchanged);
        };
        let translation = self.gestures[index].update(delta);
        resolve_drag_frame(
            &mut self.tiles,
            index,
            translation,
            self.container_width,
            &self.layout,
        )
    }

    /// Release the dragged tile; it settles on whatever the last frame decided.
    pub fn drag_end(&mut self) {
        if let Some(index) = self.active.take() {
            let target = self.target(index);
            self.gestures[index].end(target, &self.gesture_config);
            debug!(tile = index, order = self.tiles.tiles()[index].order_value(), "drag ended");
        }
    }

    /// Interrupted gesture. Orders stay as the last applied frame left them.
    pub fn drag_cancel(&mut self) {
        if let Some(index) = self.active {
            debug!(tile = index, "drag cancelled");
        }
        self.drag_end();
    }

    /// Advance settle animations. Returns true while anything is still moving.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let mut moving = false;
        for index in 0..self.gestures.len() {
            let target = self.target(index);
            moving |= self.gestures[index].advance(target, elapsed_ms, &self.gesture_config);
        }
        moving
    }

    fn target(&self, index: usize) -> Vector {
        self.tiles.tiles()[index].target_position(&self.layout)
    }

    /// Where the tile is drawn this frame.
    pub fn display_position(&self, index: usize) -> Option<Vector> {
        self.gestures.get(index).map(TileGesture::translation)
    }

    /// Topmost tile whose displayed box contains `point`.
    pub fn tile_at(&self, point: Vector) -> Option<usize> {
        let hit = |i: usize| {
            let pos = self.gestures[i].translation();
            let width = self.tiles.tiles()[i].width;
            point.x >= pos.x
                && point.x < pos.x + width
                && point.y >= pos.y
                && point.y < pos.y + self.layout.word_height
        };

        if let Some(active) = self.active.filter(|&i| hit(i)) {
            return Some(active);
        }
        let mut candidates: Vec<usize> = (0..self.gestures.len()).filter(|&i| hit(i)).collect();
        candidates.sort_by_key(|&i| self.gestures[i].phase().is_elevated());
        candidates.last().copied()
    }

    /// Words currently in the sentence, in order.
    pub fn sentence(&self) -> Vec<&str> {
        self.tiles
            .sorted_placed()
            .iter()
            .map(|&i| self.words[i].as_str())
            .collect()
    }

    /// Compare the sentence with the expected one by word text, so repeated words are interchangeable.
    pub fn is_solved(&self) -> bool {
        let Some(solution) = &self.solution else {
            return false;
        };
        let sentence = self.sentence();
        sentence.len() == solution.len()
            && sentence
                .iter()
                .zip(solution)
                .all(|(word, &i)| *word == self.words[i])
    }

    pub fn snapshot(&self) -> ExerciseSnapshot {
        let tiles = self
            .tiles
            .iter()
            .zip(&self.gestures)
            .zip(&self.words)
            .map(|((tile, gesture), word)| TileSnapshot {
                word: word.clone(),
                order: tile.order_value(),
                width: tile.width,
                x: tile.x,
                y: tile.y,
                bank: tile.bank_position(&self.layout),
                display: gesture.translation(),
                phase: gesture.phase(),
            })
            .collect();

        ExerciseSnapshot {
            tiles,
            container_width: self.container_width,
            layout: self.layout,
            active: self.active,
            sentence: self.sentence().into_iter().map(String::from).collect(),
            lines: line_count(&self.tiles, &self.layout),
            solved: self.is_solved(),
        }
    }
}
