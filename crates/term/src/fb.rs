//! Framebuffer and style types for terminal rendering.
//!
//! Besides plain styled characters, the framebuffer supports a pixel mode in
//! which every cell carries two vertically stacked pixels drawn with the upper
//! half block glyph: `fg` is the top pixel, `bg` the bottom one.

use crate::types::Rgb;

/// Glyph used for pixel cells.
pub const HALF_BLOCK: char = '▀';

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    /// Both half-pixels set to `color`.
    pub const fn solid(color: Rgb) -> Self {
        Self {
            fg: color,
            bg: color,
            bold: false,
        }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::solid(Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const fn pixels(top: Rgb, bottom: Rgb) -> Self {
        Self {
            ch: HALF_BLOCK,
            style: CellStyle {
                fg: top,
                bg: bottom,
                bold: false,
            },
        }
    }

    pub fn is_pixel(&self) -> bool {
        self.ch == HALF_BLOCK
    }

    /// Color of the top half as it appears on screen.
    pub fn top(&self) -> Rgb {
        if self.is_pixel() {
            self.style.fg
        } else {
            self.style.bg
        }
    }

    /// Color of the bottom half as it appears on screen.
    pub fn bottom(&self) -> Rgb {
        self.style.bg
    }
}

impl Default for Cell {
    fn default() -> Self {
        let black = Rgb::new(0, 0, 0);
        Self::pixels(black, black)
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Height in half-cell pixels.
    pub fn pixel_height(&self) -> u32 {
        self.height as u32 * 2
    }

    /// Resize the framebuffer, preserving the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    /// One row of cells.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = (y as usize) * (self.width as usize);
        &self.cells[start..start + self.width as usize]
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Fill every pixel with `color`.
    pub fn fill(&mut self, color: Rgb) {
        self.cells.fill(Cell::pixels(color, color));
    }

    /// Paint the half-cell pixel at column `x`, pixel row `py`.
    ///
    /// A text cell under the pixel is turned back into a pixel cell that keeps
    /// its background on the other half.
    pub fn set_pixel(&mut self, x: u16, py: u32, color: Rgb) {
        let Ok(y) = u16::try_from(py / 2) else {
            return;
        };
        let Some(i) = self.idx(x, y) else {
            return;
        };
        let cell = self.cells[i];
        let (mut top, mut bottom) = (cell.top(), cell.bottom());
        if py % 2 == 0 {
            top = color;
        } else {
            bottom = color;
        }
        self.cells[i] = Cell::pixels(top, bottom);
    }

    /// Color of the pixel at column `x`, pixel row `py`.
    pub fn pixel(&self, x: u16, py: u32) -> Option<Rgb> {
        let y = u16::try_from(py / 2).ok()?;
        let cell = self.get(x, y)?;
        Some(if py % 2 == 0 { cell.top() } else { cell.bottom() })
    }

    /// Write `s` starting at `(x, y)` over the cells' existing top color.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, fg: Rgb, bold: bool) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            if let Some(i) = self.idx(cx, y) {
                let bg = self.cells[i].top();
                self.cells[i] = Cell {
                    ch,
                    style: CellStyle { fg, bg, bold },
                };
            }
            cx += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[test]
    fn pixels_pack_two_per_cell() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set_pixel(1, 2, RED);
        fb.set_pixel(1, 3, BLUE);

        let cell = fb.get(1, 1).unwrap();
        assert_eq!(cell, Cell::pixels(RED, BLUE));
        assert_eq!(fb.pixel(1, 2), Some(RED));
        assert_eq!(fb.pixel(1, 3), Some(BLUE));
        assert_eq!(fb.pixel(1, 4), None);
    }

    #[test]
    fn text_takes_top_pixel_as_background() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.fill(BLUE);
        fb.put_str(2, 0, "hi!", RED, true);

        let cell = fb.get(2, 0).unwrap();
        assert_eq!(cell.ch, 'h');
        assert_eq!(cell.style.fg, RED);
        assert_eq!(cell.style.bg, BLUE);
        assert_eq!(fb.get(3, 0).unwrap().ch, 'i');
        assert_eq!(fb.get(1, 0).unwrap(), Cell::pixels(BLUE, BLUE));
    }

    #[test]
    fn painting_over_text_restores_pixel_cell() {
        let mut fb = FrameBuffer::new(1, 1);
        fb.fill(BLUE);
        fb.put_str(0, 0, "x", RED, false);
        fb.set_pixel(0, 1, RED);

        assert_eq!(fb.get(0, 0).unwrap(), Cell::pixels(BLUE, RED));
    }

    #[test]
    fn resize_keeps_dimensions_in_sync() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(3, 1);
        assert_eq!(fb.row(0).len(), 3);
        assert!(fb.row(1).is_empty());
        assert_eq!(fb.pixel_height(), 2);
    }
}
