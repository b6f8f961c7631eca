//! Canvas: rasterizes core draw calls into a terminal framebuffer.
//!
//! Logical screen pixels are mapped onto half-cells. Each half-cell is
//! sampled at its center, so a shape covers a half-cell when the center lies
//! inside the shape.

use std::ops::Range;

use crate::core::{Rect, Surface, TextAlign, TextStyle};
use crate::fb::FrameBuffer;
use crate::types::Rgb;

/// Largest accepted logical pixel count per cell side.
pub const MAX_CELL_PX: i32 = 64;

/// Logical screen pixels per terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelScale {
    pub col_px: i32,
    pub row_px: i32,
}

impl Default for PixelScale {
    fn default() -> Self {
        // Typical glyphs are about twice as tall as wide, which makes each
        // half-cell an 8x8 square.
        Self {
            col_px: 8,
            row_px: 16,
        }
    }
}

impl PixelScale {
    /// Values are clamped to `1..=MAX_CELL_PX` (`2..` for rows, which hold
    /// two pixels).
    pub fn new(col_px: i32, row_px: i32) -> Self {
        Self {
            col_px: col_px.clamp(1, MAX_CELL_PX),
            row_px: row_px.clamp(2, MAX_CELL_PX),
        }
    }

    /// Logical screen size of a `cols` x `rows` terminal.
    pub fn screen_size(&self, cols: u16, rows: u16) -> (i32, i32) {
        (
            (cols as i32).saturating_mul(self.col_px),
            (rows as i32).saturating_mul(self.row_px),
        )
    }

    fn half_px(&self) -> i32 {
        self.row_px / 2
    }
}

/// A [`Surface`] that draws into a [`FrameBuffer`].
pub struct Canvas<'a> {
    fb: &'a mut FrameBuffer,
    scale: PixelScale,
}

impl<'a> Canvas<'a> {
    pub fn new(fb: &'a mut FrameBuffer, scale: PixelScale) -> Self {
        Self { fb, scale }
    }

    fn columns(&self, start: i32, end: i32) -> Range<u32> {
        sample_span(start, end, self.scale.col_px, self.fb.width() as u32)
    }

    fn pixel_rows(&self, start: i32, end: i32) -> Range<u32> {
        sample_span(start, end, self.scale.half_px(), self.fb.pixel_height())
    }

    fn col_center(&self, x: u32) -> i32 {
        x as i32 * self.scale.col_px + self.scale.col_px / 2
    }

    fn row_center(&self, py: u32) -> i32 {
        let half = self.scale.half_px();
        py as i32 * half + half / 2
    }

    fn fill_where(&mut self, bounds: Rect, color: Rgb, inside: impl Fn(i32, i32) -> bool) {
        let cols = self.columns(bounds.x, bounds.right());
        let rows = self.pixel_rows(bounds.y, bounds.bottom());
        for py in rows {
            let sy = self.row_center(py);
            for x in cols.clone() {
                if inside(self.col_center(x), sy) {
                    self.fb.set_pixel(x as u16, py, color);
                }
            }
        }
    }
}

impl Surface for Canvas<'_> {
    fn clear(&mut self, color: Rgb) {
        self.fb.fill(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        if rect.is_empty() {
            return;
        }
        self.fill_where(rect, color, |_, _| true);
    }

    fn stroke_rect(&mut self, rect: Rect, width: i32, color: Rgb) {
        if rect.is_empty() || width <= 0 {
            return;
        }
        let inner = Rect::new(
            rect.x + width,
            rect.y + width,
            rect.width - 2 * width,
            rect.height - 2 * width,
        );
        self.fill_where(rect, color, |sx, sy| inner.is_empty() || !inner.contains(sx, sy));
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Rgb) {
        if bounds.is_empty() {
            return;
        }
        let rx = bounds.width as f64 / 2.0;
        let ry = bounds.height as f64 / 2.0;
        let cx = bounds.x as f64 + rx;
        let cy = bounds.y as f64 + ry;
        self.fill_where(bounds, color, |sx, sy| {
            let nx = (sx as f64 - cx) / rx;
            let ny = (sy as f64 - cy) / ry;
            nx * nx + ny * ny <= 1.0
        });
    }

    fn text(&mut self, x: i32, y: i32, text: &str, style: TextStyle) {
        let row = (y - 1).max(0) / self.scale.row_px;
        let Ok(row) = u16::try_from(row) else {
            return;
        };

        let len = text.chars().count() as i32;
        let mut col = x.div_euclid(self.scale.col_px);
        if style.align == TextAlign::Center {
            col -= len / 2;
        }

        // Clip on the left by skipping characters.
        let skip = (-col).max(0) as usize;
        let col = col.max(0);
        let Ok(col) = u16::try_from(col) else {
            return;
        };
        let visible: String = text.chars().skip(skip).collect();
        self.fb.put_str(col, row, &visible, style.color, true);
    }
}

/// Indices `i < limit` whose sample center `i * step + step / 2` lies in
/// `[start, end)`.
fn sample_span(start: i32, end: i32, step: i32, limit: u32) -> Range<u32> {
    let half = step / 2;
    let lo = ceil_div(start - half, step).max(0) as i64;
    let hi = (ceil_div(end - half, step) as i64).min(limit as i64);
    if hi <= lo {
        return 0..0;
    }
    lo as u32..hi as u32
}

fn ceil_div(a: i32, b: i32) -> i32 {
    -((-a).div_euclid(b))
}
