//! SentenceView: maps an `ExerciseSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Engine units are terminal cells. The sentence area's origin sits at a fixed
//! screen offset; the bank is drawn `margin_top` rows below it.

use crate::core::{Exercise, ExerciseDef, ExerciseError, ExerciseSnapshot, TileSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GesturePhase, LayoutConfig, Vector};

/// Rows per tile box.
const TILE_ROWS: u16 = 3;

/// Columns a word needs beyond its characters: borders, padding and a gap.
const TILE_CHROME: usize = 5;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Tile width in cells for `word`.
pub fn measure_word(word: &str) -> f32 {
    (word.chars().count() + TILE_CHROME) as f32
}

/// A lightweight terminal view of the exercise.
#[derive(Debug, Clone, Copy)]
pub struct SentenceView {
    /// Screen column of the sentence area's left edge.
    origin_col: u16,
    /// Screen row of the sentence area's top edge.
    origin_row: u16,
    layout: LayoutConfig,
}

impl Default for SentenceView {
    fn default() -> Self {
        Self::new(2, 2, 3)
    }
}

impl SentenceView {
    pub fn new(origin_col: u16, origin_row: u16, number_of_lines: u32) -> Self {
        let word_height = TILE_ROWS as f32;
        Self {
            origin_col,
            origin_row,
            layout: LayoutConfig {
                word_height,
                number_of_lines,
                // One separator row and one blank row between sentence and bank.
                margin_top: number_of_lines as f32 * word_height + 2.0,
                margin_left: origin_col as f32,
            },
        }
    }

    /// Layout metrics at cell scale.
    pub fn layout_config(&self) -> LayoutConfig {
        self.layout
    }

    /// Mount `def` at this view's cell scale.
    ///
    /// Words are measured in cells and placed with the view's own layout, so
    /// everything the engine positions lands where this view draws.
    pub fn mount(&self, def: &ExerciseDef, viewport: Viewport) -> Result<Exercise, ExerciseError> {
        Exercise::new(def, measure_word, self.container_width(viewport), self.layout)
    }

    /// Sentence container width for a viewport, leaving the same margin on both sides.
    pub fn container_width(&self, viewport: Viewport) -> f32 {
        viewport.width.saturating_sub(self.origin_col * 2).max(1) as f32
    }

    /// Screen cell to sentence-area coordinates.
    pub fn to_engine(&self, column: u16, row: u16) -> Vector {
        Vector::new(
            column as f32 - self.origin_col as f32,
            row as f32 - self.origin_row as f32,
        )
    }

    fn to_screen(&self, point: Vector) -> (i32, i32) {
        (
            point.x.round() as i32 + self.origin_col as i32,
            point.y.round() as i32 + self.origin_row as i32,
        )
    }

    pub fn render(&self, snap: &ExerciseSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Render the exercise into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized and
    /// cleared here.
    pub fn render_into(&self, snap: &ExerciseSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let header = CellStyle::new(Rgb::new(240, 240, 240), Rgb::new(0, 0, 0)).bold();
        let hint = CellStyle::default().dim();
        let rule = CellStyle::new(Rgb::new(70, 70, 90), Rgb::new(0, 0, 0));

        fb.put_str(self.origin_col as i32, 0, "Build the sentence", header);
        fb.put_str(
            self.origin_col as i32 + 20,
            0,
            "drag words with the mouse · r reset · q quit",
            hint,
        );

        // Separator between the sentence and the bank.
        let sentence_rows = snap.layout.number_of_lines as f32 * snap.layout.word_height;
        let (_, sep_row) = self.to_screen(Vector::new(0.0, sentence_rows));
        fb.hline(
            self.origin_col as i32,
            sep_row,
            snap.container_width as u16,
            '┄',
            rule,
        );

        // Dotted guides through the sentence lines no tile occupies yet.
        let guide = CellStyle::new(Rgb::new(60, 60, 70), Rgb::new(0, 0, 0));
        let word_height = snap.layout.word_height;
        for line in snap.lines..snap.layout.number_of_lines {
            let middle = line as f32 * word_height + (word_height / 2.0).floor();
            let (_, row) = self.to_screen(Vector::new(0.0, middle));
            fb.hline(self.origin_col as i32, row, snap.container_width as u16, '·', guide);
        }

        // Bank slots stay visible while their tile is elsewhere.
        let slot = CellStyle::new(Rgb::new(60, 60, 70), Rgb::new(0, 0, 0)).dim();
        for tile in &snap.tiles {
            let (x, y) = self.to_screen(tile.bank);
            fb.draw_box(x, y, tile_cols(tile), TILE_ROWS, slot);
        }

        for i in snap.draw_order() {
            self.draw_tile(fb, &snap.tiles[i]);
        }

        self.draw_status(fb, snap, viewport);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, tile: &TileSnapshot) {
        let style = match tile.phase {
            GesturePhase::Dragging => {
                CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(250, 210, 90)).bold()
            }
            _ if tile.is_in_bank() => {
                CellStyle::new(Rgb::new(220, 220, 230), Rgb::new(40, 44, 60))
            }
            _ => CellStyle::new(Rgb::new(240, 240, 240), Rgb::new(40, 90, 140)),
        };

        let (x, y) = self.to_screen(tile.display);
        fb.draw_box(x, y, tile_cols(tile), TILE_ROWS, style);
        fb.put_str(x + 2, y + 1, &tile.word, style);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &ExerciseSnapshot, viewport: Viewport) {
        let Some(row) = viewport.height.checked_sub(1) else {
            return;
        };
        let label = CellStyle::default().dim();
        let text = CellStyle::default().bold();

        let x = self.origin_col as i32;
        fb.put_str(x, row as i32, "Sentence:", label);
        let mut col = x + 10;
        for word in &snap.sentence {
            fb.put_str(col, row as i32, word, text);
            col += word.chars().count() as i32 + 1;
        }
        if snap.solved {
            let ok = CellStyle::new(Rgb::new(120, 220, 120), Rgb::new(0, 0, 0)).bold();
            fb.put_str(col, row as i32, "✓ solved", ok);
        }
    }
}

/// Box width in columns; the last measured column is the gap.
fn tile_cols(tile: &TileSnapshot) -> u16 {
    (tile.width.round() as u16).saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_layout_places_bank_below_sentence() {
        let layout = SentenceView::default().layout_config();
        assert_eq!(layout.word_height, 3.0);
        assert_eq!(layout.sentence_height(), 6.0);
        assert_eq!(layout.margin_top, 11.0);
    }

    #[test]
    fn to_engine_is_relative_to_origin() {
        let view = SentenceView::default();
        assert_eq!(view.to_engine(2, 2), Vector::ZERO);
        assert_eq!(view.to_engine(0, 5), Vector::new(-2.0, 3.0));
        assert_eq!(view.to_screen(Vector::new(-2.0, 3.0)), (0, 5));
    }

    #[test]
    fn container_width_keeps_margins() {
        let view = SentenceView::default();
        assert_eq!(view.container_width(Viewport::new(80, 24)), 76.0);
        assert_eq!(view.container_width(Viewport::new(3, 24)), 1.0);
    }

    #[test]
    fn measure_counts_chars_not_bytes() {
        assert_eq!(measure_word("cat"), 8.0);
        assert_eq!(measure_word("été"), 8.0);
    }
}
