//! Screen-scaled layout, computed once per session.
//!
//! All proportions are fixed: the grid spans 70% x 20% of the screen, inset
//! 15% from the left and 10% from the top. Fractions are truncated toward zero
//! before integer division, matching the way the game has always been laid out.

use crate::geom::Rect;
use crate::types::{BALL_START_DIR, PADDLE_HEIGHT, PADDLE_STEP};

const GRID_WIDTH_FRACTION: f64 = 0.7;
const GRID_HEIGHT_FRACTION: f64 = 0.2;
const GRID_LEFT_FRACTION: f64 = 0.15;
const GRID_TOP_FRACTION: f64 = 0.1;
const PADDLE_Y_FRACTION: f64 = 0.9;
const LOSS_LINE_FRACTION: f64 = 0.95;

/// Immutable layout shared by [`crate::BrickGrid`] and [`crate::GameState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub screen_width: i32,
    pub screen_height: i32,
    pub rows: usize,
    pub cols: usize,
    pub brick_width: i32,
    pub brick_height: i32,
    /// Left edge of column 0.
    pub grid_left: i32,
    /// Top edge of row 0.
    pub grid_top: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_y: i32,
    pub paddle_step: i32,
    pub ball_size: i32,
    pub ball_start: (i32, i32),
    pub ball_start_dir: (i32, i32),
    /// Ball `y` strictly greater than this ends the session.
    pub loss_line: f64,
    pub score_font: i32,
    pub banner_font: i32,
    pub prompt_font: i32,
}

impl Layout {
    /// Compute the layout for a screen of `screen_width` x `screen_height`
    /// pixels and a `rows` x `cols` brick grid.
    ///
    /// Zero rows/cols and non-positive screen sizes are raised to one. Rows
    /// and cols are capped so that every brick is at least one pixel on each
    /// side; a brick with no area could never be hit.
    pub fn new(screen_width: i32, screen_height: i32, rows: u16, cols: u16) -> Self {
        let w = screen_width.max(1);
        let h = screen_height.max(1);
        let grid_width = scale(w, GRID_WIDTH_FRACTION).max(1);
        let grid_height = scale(h, GRID_HEIGHT_FRACTION).max(1);
        let rows = fit_cells(rows, grid_height);
        let cols = fit_cells(cols, grid_width);

        let paddle_width = w / 7;

        Self {
            screen_width: w,
            screen_height: h,
            rows,
            cols,
            brick_width: grid_width / cols as i32,
            brick_height: grid_height / rows as i32,
            grid_left: scale(w, GRID_LEFT_FRACTION),
            grid_top: scale(h, GRID_TOP_FRACTION),
            paddle_width,
            paddle_height: PADDLE_HEIGHT,
            paddle_y: scale(h, PADDLE_Y_FRACTION),
            paddle_step: PADDLE_STEP,
            ball_size: w / 50,
            ball_start: (w / 4, h / 2),
            ball_start_dir: BALL_START_DIR,
            loss_line: h as f64 * LOSS_LINE_FRACTION,
            score_font: w / 40,
            banner_font: w / 20,
            prompt_font: w / 30,
        }
    }

    pub fn brick_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Centered paddle `x`.
    pub fn paddle_start_x(&self) -> i32 {
        (self.screen_width - self.paddle_width) / 2
    }

    /// Largest legal paddle `x`.
    pub fn paddle_max_x(&self) -> i32 {
        (self.screen_width - self.paddle_width).max(0)
    }

    pub fn brick_rect(&self, row: usize, col: usize) -> Rect {
        Rect::new(
            self.grid_left + col as i32 * self.brick_width,
            self.grid_top + row as i32 * self.brick_height,
            self.brick_width,
            self.brick_height,
        )
    }

    pub fn is_past_loss_line(&self, ball_y: i32) -> bool {
        ball_y as f64 > self.loss_line
    }

    /// Anchor of the score readout.
    pub fn score_origin(&self) -> (i32, i32) {
        (self.screen_width - 200, 30)
    }
}

fn scale(v: i32, fraction: f64) -> i32 {
    (v as f64 * fraction) as i32
}

/// Clamp a cell count to `1..=span` (`span >= 1`) so each cell gets at least one pixel.
fn fit_cells(requested: u16, span: i32) -> usize {
    (requested as usize).clamp(1, span as usize)
}
