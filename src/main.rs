//! Terminal word tiles runner (default binary).
//!
//! Drag words from the bank into the sentence with the mouse. Uses crossterm
//! for input and the framebuffer-based renderer from `word_tiles::term`.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use word_tiles::clock::FrameClock;
use word_tiles::config::AppConfig;
use word_tiles::core::ExerciseDef;
use word_tiles::input::{pointer_event, should_quit, should_reset, PointerTracker};
use word_tiles::term::{FrameBuffer, SentenceView, TerminalRenderer, Viewport};
use word_tiles::types::PointerAction;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    config.init_tracing()?;
    let def = config.load_exercise()?;

    let mut term = TerminalRenderer::enter()?;
    let result = run(&mut term, &config, &def);
    // Restore the terminal before printing the sentence.
    let _ = term.leave();

    let sentence = result?;
    println!("{}", sentence.join(" "));
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, def: &ExerciseDef) -> Result<Vec<String>> {
    let view = SentenceView::default();

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut exercise = view.mount(def, viewport)?;
    let mut tracker = PointerTracker::new();
    let mut fb = FrameBuffer::new(w, h);

    let mut clock = FrameClock::new(config.tick_ms, Instant::now());

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((viewport.width, viewport.height));
        if (w, h) != (viewport.width, viewport.height) {
            viewport = Viewport::new(w, h);
            tracker.cancel();
            exercise.resize(view.container_width(viewport));
            term.invalidate();
        }

        // Render.
        view.render_into(&exercise.snapshot(), viewport, &mut fb);
        term.present(&fb)?;

        // Input with timeout until next tick.
        if event::poll(clock.timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(exercise.sentence().into_iter().map(String::from).collect());
                    }
                    if should_reset(key) {
                        tracker.cancel();
                        exercise = view.mount(def, viewport)?;
                        info!("exercise reset");
                    }
                }
                Event::Mouse(mouse) => {
                    match pointer_event(mouse).and_then(|p| tracker.handle(p)) {
                        Some(PointerAction::Begin { column, row }) => {
                            // A release outside the terminal never reaches us.
                            exercise.drag_end();
                            if let Some(index) = exercise.tile_at(view.to_engine(column, row)) {
                                exercise.drag_start(index)?;
                            }
                        }
                        Some(PointerAction::Move(delta)) => {
                            exercise.drag_move(delta)?;
                        }
                        Some(PointerAction::End) => {
                            exercise.drag_end();
                            if exercise.is_solved() {
                                info!(sentence = ?exercise.sentence(), "exercise solved");
                            }
                        }
                        None => {}
                    }
                }
                Event::FocusLost => {
                    tracker.cancel();
                    exercise.drag_cancel();
                }
                _ => {}
            }
        }

        // Tick.
        if let Some(elapsed_ms) = clock.due(Instant::now()) {
            exercise.tick(elapsed_ms);
        }
    }
}
