//! Mapping from terminal events to pointer events and commands.

use crate::types::PointerEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map a mouse event to a pointer event. Only the left button drags tiles.
pub fn pointer_event(event: MouseEvent) -> Option<PointerEvent> {
    let (column, row) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Press { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::Drag { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Release { column, row }),
        _ => None,
    }
}

/// Check if key should quit the exercise.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key should remount the exercise from its definition.
pub fn should_reset(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}
