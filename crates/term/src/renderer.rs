//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or [`TerminalRenderer::invalidate`])
//! is written in full; after that only runs of changed cells are emitted.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::Rgb;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    previous: Option<FrameBuffer>,
    out: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            previous: None,
            out: Vec::with_capacity(64 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.out.clear();
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        Ok(())
    }

    /// Force the next frame to be a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Present `fb`, then swap it with the previously shown frame.
    ///
    /// On return `fb` holds stale contents with the same dimensions; callers
    /// redraw it completely before the next present.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.out.clear();
        match self.previous.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_changes(&prev, fb, &mut self.out)?;
                std::mem::swap(&mut prev, fb);
                self.previous = Some(prev);
            }
            _ => {
                encode_full(fb, &mut self.out)?;
                self.previous = Some(fb.clone());
            }
        }
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for cell in fb.row(y) {
            pen.print(out, cell)?;
        }
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the cells of `next` that differ from `prev` into `out`.
///
/// Both frames must have the same dimensions.
pub fn encode_changes(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    for y in 0..next.height() {
        for run in changed_runs(prev.row(y), next.row(y)) {
            out.queue(cursor::MoveTo(run.start as u16, y))?;
            for cell in &next.row(y)[run] {
                pen.print(out, cell)?;
            }
        }
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Maximal runs of indices where `a` and `b` differ.
fn changed_runs<'r>(a: &'r [Cell], b: &'r [Cell]) -> impl Iterator<Item = std::ops::Range<usize>> + 'r {
    let len = a.len().min(b.len());
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < len && a[x] == b[x] {
            x += 1;
        }
        if x >= len {
            return None;
        }
        let start = x;
        while x < len && a[x] != b[x] {
            x += 1;
        }
        Some(start..x)
    })
}

/// Tracks the active terminal style so unchanged attributes are not re-sent.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn print(&mut self, out: &mut Vec<u8>, cell: &Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            out.queue(SetAttribute(Attribute::Reset))?;
            out.queue(SetForegroundColor(to_color(cell.style.fg)))?;
            out.queue(SetBackgroundColor(to_color(cell.style.bg)))?;
            if cell.style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            self.style = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
