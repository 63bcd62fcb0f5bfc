//! Renderer encoding tests - first frames and repaints of rendered exercises

use word_tiles::core::ExerciseDef;
use word_tiles::term::{encode_frame, FrameBuffer, SentenceView, Viewport};
use word_tiles::types::Vector;

fn encode(prev: Option<&FrameBuffer>, next: &FrameBuffer) -> String {
    let mut out = Vec::new();
    encode_frame(prev, next, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_first_frame_contains_words() {
    let view = SentenceView::default();
    let viewport = Viewport::new(60, 20);
    let ex = view
        .mount(&ExerciseDef::from_words(&["Le", "chat"]), viewport)
        .unwrap();

    let out = encode(None, &view.render(&ex.snapshot(), viewport));
    assert!(out.contains("Build the sentence"));
    assert!(out.contains("chat"));
}

#[test]
fn test_repaint_after_drag_skips_static_header() {
    let view = SentenceView::default();
    let viewport = Viewport::new(60, 20);
    let mut ex = view
        .mount(&ExerciseDef::from_words(&["Le", "chat"]), viewport)
        .unwrap();

    let before = view.render(&ex.snapshot(), viewport);
    ex.drag_start(1).unwrap();
    ex.drag_move(Vector::new(0.0, -11.0)).unwrap();
    let after = view.render(&ex.snapshot(), viewport);

    let out = encode(Some(&before), &after);
    assert!(!out.contains("Build the sentence"));
    assert!(out.contains("chat"));
}

#[test]
fn test_repaint_of_identical_frame_writes_no_cells() {
    let view = SentenceView::default();
    let viewport = Viewport::new(40, 20);
    let ex = view.mount(&ExerciseDef::from_words(&["Le"]), viewport).unwrap();

    let fb = view.render(&ex.snapshot(), viewport);
    assert!(!encode(Some(&fb), &fb).contains("Le"));
}
