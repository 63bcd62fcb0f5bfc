//! Pointer tracker for terminal drags.
//!
//! Terminals report absolute cell positions. Gestures want the delta since the
//! press, so the tracker remembers where the press happened and scales cell
//! offsets into engine units.

use crate::types::{PointerAction, PointerEvent, Vector};

#[derive(Debug, Clone)]
pub struct PointerTracker {
    press: Option<(u16, u16)>,
    units_per_column: f32,
    units_per_row: f32,
}

impl PointerTracker {
    /// One engine unit per terminal cell.
    pub fn new() -> Self {
        Self::with_scale(1.0, 1.0)
    }

    pub fn with_scale(units_per_column: f32, units_per_row: f32) -> Self {
        Self {
            press: None,
            units_per_column,
            units_per_row,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Feed one pointer event.
    ///
    /// A drag without a prior press (e.g. the press landed outside the
    /// terminal) is ignored, as is a release without a press.
    pub fn handle(&mut self, event: PointerEvent) -> Option<PointerAction> {
        match event {
            PointerEvent::Press { column, row } => {
                self.press = Some((column, row));
                Some(PointerAction::Begin { column, row })
            }
            PointerEvent::Drag { column, row } => {
                let (start_col, start_row) = self.press?;
                Some(PointerAction::Move(Vector::new(
                    (column as f32 - start_col as f32) * self.units_per_column,
                    (row as f32 - start_row as f32) * self.units_per_row,
                )))
            }
            PointerEvent::Release { .. } => self.press.take().map(|_| PointerAction::End),
        }
    }

    /// Forget the current press (focus loss, resize).
    pub fn cancel(&mut self) -> bool {
        self.press.take().is_some()
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}
