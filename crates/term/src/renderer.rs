//! TerminalRenderer: puts exercise frames on a real terminal.
//!
//! Holding a renderer means the terminal is in exercise mode: raw input,
//! alternate screen, mouse capture and a hidden cursor. Dropping it puts the
//! terminal back, so an early `?` in the event loop never leaves the shell
//! unusable.
//!
//! Frames are written per row. Only the span between the first and the last
//! changed cell of a row is repainted, and inside that span cells sharing a
//! style are printed as one styled string.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{Attribute, Color, ContentStyle, PrintStyledContent, ResetColor, SetAttribute, Stylize},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    out: io::Stdout,
    /// What the terminal currently shows; `None` forces a full repaint.
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
    active: bool,
}

impl TerminalRenderer {
    /// Switch the terminal into exercise mode.
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut renderer = Self {
            out: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(16 * 1024),
            active: true,
        };
        renderer.buf.queue(terminal::EnterAlternateScreen)?;
        renderer.buf.queue(EnableMouseCapture)?;
        renderer.buf.queue(cursor::Hide)?;
        renderer.flush()?;
        Ok(renderer)
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn leave(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.buf.clear();
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next `present`, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Bring the terminal up to date with `fb`.
    pub fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame(self.shown.as_ref(), fb, &mut self.buf)?;
        self.flush()?;
        match &mut self.shown {
            Some(shown) => shown.copy_from(fb),
            None => self.shown = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

/// Encode the commands that turn `prev` into `next` on screen.
///
/// With no previous frame, or one of another size, the screen is cleared and
/// every row is written.
pub fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut text = String::new();
    for y in 0..next.height() {
        let row = next.row(y);
        let span = match prev {
            Some(prev) => match dirty_span(prev.row(y), row) {
                Some(span) => span,
                None => continue,
            },
            None => 0..row.len(),
        };
        out.queue(cursor::MoveTo(span.start as u16, y))?;
        print_runs(out, &row[span], &mut text)?;
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Columns from the first to the last differing cell, if any differ.
fn dirty_span(before: &[Cell], after: &[Cell]) -> Option<Range<usize>> {
    let differs = |(a, b): (&Cell, &Cell)| a != b;
    let start = before.iter().zip(after).position(differs)?;
    let end = before.iter().zip(after).rposition(differs)?;
    Some(start..end + 1)
}

fn print_runs(out: &mut Vec<u8>, cells: &[Cell], text: &mut String) -> Result<()> {
    for run in cells.chunk_by(|a, b| a.style == b.style) {
        text.clear();
        text.extend(run.iter().map(|c| c.ch));
        out.queue(PrintStyledContent(content_style(run[0].style).apply(text.as_str())))?;
    }
    Ok(())
}

fn content_style(style: CellStyle) -> ContentStyle {
    let mut content = ContentStyle::new().with(color(style.fg)).on(color(style.bg));
    if style.bold {
        content = content.bold();
    }
    if style.dim {
        content = content.dim();
    }
    content
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(prev: Option<&FrameBuffer>, next: &FrameBuffer) -> String {
        let mut out = Vec::new();
        encode_frame(prev, next, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn dirty_span_covers_first_to_last_change() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(8, 1);
        let mut b = a.clone();
        b.put_char(2, 0, 'x', style);
        b.put_char(5, 0, 'y', style);
        assert_eq!(dirty_span(a.row(0), b.row(0)), Some(2..6));
        assert_eq!(dirty_span(a.row(0), a.row(0)), None);
    }

    #[test]
    fn first_frame_clears_and_writes_all_rows() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.put_str(0, 0, "Le", CellStyle::default());
        fb.put_str(0, 1, "chat", CellStyle::default());

        let out = encode(None, &fb);
        assert!(out.contains("\x1b[2J"));
        assert!(out.contains("Le  "));
        assert!(out.contains("chat"));
    }

    #[test]
    fn unchanged_frame_writes_no_cells() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 0, "tile", CellStyle::default());
        let out = encode(Some(&fb), &fb);
        assert!(!out.contains("tile"));
        assert!(!out.contains("\x1b[2J"));
    }

    #[test]
    fn resized_frame_is_repainted_in_full() {
        let prev = FrameBuffer::new(3, 1);
        let mut next = FrameBuffer::new(4, 1);
        next.put_str(0, 0, "mot", CellStyle::default());
        let out = encode(Some(&prev), &next);
        assert!(out.contains("\x1b[2J"));
        assert!(out.contains("mot"));
    }

    #[test]
    fn same_style_cells_print_as_one_string() {
        let plain = CellStyle::default();
        let bold = plain.bold();
        let mut fb = FrameBuffer::new(6, 1);
        fb.put_str(0, 0, "ab", bold);
        fb.put_str(2, 0, "cdef", plain);

        let out = encode(None, &fb);
        assert!(out.contains("ab"));
        assert!(out.contains("cdef"));
    }
}
