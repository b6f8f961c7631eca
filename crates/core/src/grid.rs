//! Brick grid - cell state, rendering, and ball-vs-brick resolution
//!
//! The grid is a row-major `rows x cols` array of [`BrickKind`]. It is built
//! as a strict checkerboard of the two brick kinds and cells only ever become
//! `Empty`. Collision resolution reports what happened through [`BrickHit`];
//! the grid never touches score or ball state itself.

use crate::geom::Rect;
use crate::layout::Layout;
use crate::surface::Surface;
use crate::types::{palette, BounceAxis, BrickKind, BRICK_BORDER};

/// Result of destroying one brick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BrickHit {
    pub row: usize,
    pub col: usize,
    /// Kind the cell held before it was cleared.
    pub kind: BrickKind,
    pub points: u32,
    /// Ball direction component to invert.
    pub axis: BounceAxis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrickGrid {
    cells: Vec<BrickKind>,
    rows: usize,
    cols: usize,
    layout: Layout,
}

impl BrickGrid {
    /// Build a full checkerboard grid for `layout`.
    ///
    /// Cell `(i, j)` is [`BrickKind::Bonus`] when exactly one of `i`, `j` is
    /// even, otherwise [`BrickKind::Standard`].
    pub fn new(layout: &Layout) -> Self {
        let rows = layout.rows;
        let cols = layout.cols;
        let mut cells = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                cells.push(checkerboard_kind(i, j));
            }
        }

        Self {
            cells,
            rows,
            cols,
            layout: *layout,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell content, or `None` outside the grid.
    pub fn kind(&self, row: usize, col: usize) -> Option<BrickKind> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Number of cells still holding a brick.
    pub fn remaining(&self) -> usize {
        self.cells.iter().filter(|k| !k.is_empty()).count()
    }

    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(BrickKind::is_empty)
    }

    /// Screen rectangle of cell `(row, col)`.
    pub fn brick_rect(&self, row: usize, col: usize) -> Rect {
        self.layout.brick_rect(row, col)
    }

    /// Iterate `(row, col, kind)` over non-empty cells in row-major order.
    pub fn bricks(&self) -> impl Iterator<Item = (usize, usize, BrickKind)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, k)| !k.is_empty())
            .map(move |(idx, &k)| (idx / cols, idx % cols, k))
    }

    /// Draw every remaining brick with a black border. Empty cells draw nothing.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        for (row, col, kind) in self.bricks() {
            let Some(color) = kind.color() else {
                continue;
            };
            let rect = self.brick_rect(row, col);
            surface.fill_rect(rect, color);
            surface.stroke_rect(rect, BRICK_BORDER, palette::BRICK_BORDER);
        }
    }

    /// Destroy the first brick (row-major) whose box overlaps the ball's box.
    ///
    /// At most one brick is resolved per call, even when the ball overlaps
    /// several. The bounce is horizontal when the ball's box lies outside the
    /// brick's horizontal span (within one pixel), vertical otherwise.
    pub fn resolve_collision(
        &mut self,
        ball_x: i32,
        ball_y: i32,
        ball_size: i32,
    ) -> Option<BrickHit> {
        let ball = Rect::square(ball_x, ball_y, ball_size);

        let idx = self.cells.iter().enumerate().position(|(idx, kind)| {
            !kind.is_empty() && ball.intersects(&self.brick_rect(idx / self.cols, idx % self.cols))
        })?;

        let (row, col) = (idx / self.cols, idx % self.cols);
        let brick = self.brick_rect(row, col);
        let kind = std::mem::take(&mut self.cells[idx]);

        let axis = if ball_x + ball_size - 1 <= brick.x || ball_x + 1 >= brick.right() {
            BounceAxis::Horizontal
        } else {
            BounceAxis::Vertical
        };

        Some(BrickHit {
            row,
            col,
            kind,
            points: kind.points(),
            axis,
        })
    }
}

fn checkerboard_kind(row: usize, col: usize) -> BrickKind {
    if (row % 2 == 0) != (col % 2 == 0) {
        BrickKind::Bonus
    } else {
        BrickKind::Standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, DrawList};

    fn grid_2x2() -> BrickGrid {
        BrickGrid::new(&Layout::new(1000, 1000, 2, 2))
    }

    #[test]
    fn checkerboard_2x2() {
        let g = grid_2x2();
        assert_eq!(g.kind(0, 0), Some(BrickKind::Standard));
        assert_eq!(g.kind(0, 1), Some(BrickKind::Bonus));
        assert_eq!(g.kind(1, 0), Some(BrickKind::Bonus));
        assert_eq!(g.kind(1, 1), Some(BrickKind::Standard));
        assert_eq!(g.kind(2, 0), None);
        assert_eq!(g.remaining(), 4);
    }

    #[test]
    fn miss_leaves_grid_untouched() {
        let mut g = grid_2x2();
        let before = g.clone();
        assert_eq!(g.resolve_collision(0, 600, 20), None);
        assert_eq!(g, before);
    }

    #[test]
    fn hit_from_below_bounces_vertically() {
        let mut g = grid_2x2();
        // Brick (1,0) spans x 150..500, y 200..300. Ball box 300..320 x 290..310.
        let hit = g.resolve_collision(300, 290, 20).unwrap();
        assert_eq!((hit.row, hit.col), (1, 0));
        assert_eq!(hit.kind, BrickKind::Bonus);
        assert_eq!(hit.points, 20);
        assert_eq!(hit.axis, BounceAxis::Vertical);
        assert_eq!(g.kind(1, 0), Some(BrickKind::Empty));
        assert_eq!(g.remaining(), 3);
    }

    #[test]
    fn side_overlap_bounces_horizontally() {
        let mut g = grid_2x2();
        // Ball box 131..151 only reaches one pixel into the brick at x=150.
        let hit = g.resolve_collision(131, 120, 20).unwrap();
        assert_eq!((hit.row, hit.col), (0, 0));
        assert_eq!(hit.axis, BounceAxis::Horizontal);

        // Right edge: brick (0,1) ends at 850, ball starts at 849.
        let hit = g.resolve_collision(849, 120, 20).unwrap();
        assert_eq!((hit.row, hit.col), (0, 1));
        assert_eq!(hit.axis, BounceAxis::Horizontal);
    }

    #[test]
    fn only_first_overlapping_brick_is_resolved() {
        let mut g = grid_2x2();
        // Ball straddles all four bricks around (500, 200).
        let hit = g.resolve_collision(490, 190, 20).unwrap();
        assert_eq!((hit.row, hit.col), (0, 0));
        assert_eq!(g.remaining(), 3);

        // The next call picks the next brick in row-major order.
        let hit = g.resolve_collision(490, 190, 20).unwrap();
        assert_eq!((hit.row, hit.col), (0, 1));
        assert_eq!(g.remaining(), 2);
    }

    #[test]
    fn brick_rects_match_layout() {
        let layout = Layout::new(1366, 768, 15, 15);
        let g = BrickGrid::new(&layout);
        for (row, col, _) in g.bricks() {
            assert_eq!(g.brick_rect(row, col), layout.brick_rect(row, col));
        }
    }

    #[test]
    fn destroyed_brick_never_hits_again() {
        let mut g = BrickGrid::new(&Layout::new(1000, 1000, 1, 1));
        assert!(g.resolve_collision(400, 150, 20).is_some());
        assert!(g.is_cleared());
        assert_eq!(g.resolve_collision(400, 150, 20), None);
    }

    #[test]
    fn render_skips_empty_cells() {
        let mut g = grid_2x2();
        g.resolve_collision(300, 290, 20);

        let mut list = DrawList::new();
        g.render(&mut list);

        let fills = list
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect(..)))
            .count();
        let strokes = list
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeRect(_, 2, _)))
            .count();
        assert_eq!(fills, 3);
        assert_eq!(strokes, 3);
        assert_eq!(
            list.commands()[0],
            DrawCommand::FillRect(Rect::new(150, 100, 350, 100), palette::STANDARD_BRICK)
        );
    }
}
