//! Game state module - paddle, ball, score, and the phase state machine
//!
//! Two entry points drive a session:
//!
//! - [`GameState::tick`] advances the simulation by one fixed step.
//! - [`GameState::apply_action`] applies one discrete input event.
//!
//! Loss/win detection runs at presentation time through
//! [`GameState::evaluate`] (called by [`GameState::present`]), so a driver
//! that never renders never ends a session.

use crate::geom::Rect;
use crate::grid::{BrickGrid, BrickHit};
use crate::layout::Layout;
use crate::render::draw_frame;
use crate::surface::Surface;
use crate::types::{BounceAxis, Phase, PlayerAction};

/// Ball position (top-left of its bounding box) and per-tick direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
}

impl Ball {
    fn at_start(layout: &Layout) -> Self {
        Self {
            x: layout.ball_start.0,
            y: layout.ball_start.1,
            dx: layout.ball_start_dir.0,
            dy: layout.ball_start_dir.1,
        }
    }

    fn bounce(&mut self, axis: BounceAxis) {
        match axis {
            BounceAxis::Horizontal => self.dx = -self.dx,
            BounceAxis::Vertical => self.dy = -self.dy,
        }
    }

    fn freeze(&mut self) {
        self.dx = 0;
        self.dy = 0;
    }
}

/// What the driver should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    layout: Layout,
    grid: BrickGrid,
    paddle_x: i32,
    ball: Ball,
    score: u32,
    bricks_remaining: u32,
    phase: Phase,
    redraw_requested: bool,
}

impl GameState {
    /// Create a game waiting for its first restart.
    pub fn new(layout: Layout) -> Self {
        Self {
            grid: BrickGrid::new(&layout),
            paddle_x: layout.paddle_start_x(),
            ball: Ball::at_start(&layout),
            score: 0,
            bricks_remaining: layout.brick_count() as u32,
            phase: Phase::NotPlaying,
            redraw_requested: true,
            layout,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn grid(&self) -> &BrickGrid {
        &self.grid
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn bricks_remaining(&self) -> u32 {
        self.bricks_remaining
    }

    pub fn paddle_x(&self) -> i32 {
        self.paddle_x
    }

    pub fn paddle_rect(&self) -> Rect {
        Rect::new(
            self.paddle_x,
            self.layout.paddle_y,
            self.layout.paddle_width,
            self.layout.paddle_height,
        )
    }

    pub fn ball(&self) -> Ball {
        self.ball
    }

    pub fn ball_rect(&self) -> Rect {
        Rect::square(self.ball.x, self.ball.y, self.layout.ball_size)
    }

    /// Reposition the ball.
    ///
    /// Intended for harnesses that script a scenario; gameplay never calls it.
    pub fn place_ball(&mut self, ball: Ball) {
        self.ball = ball;
    }

    /// Reset every mutable field and enter `Playing`.
    pub fn restart(&mut self) {
        let previous = self.phase;
        self.grid = BrickGrid::new(&self.layout);
        self.paddle_x = self.layout.paddle_start_x();
        self.ball = Ball::at_start(&self.layout);
        self.score = 0;
        self.bricks_remaining = self.layout.brick_count() as u32;
        self.phase = Phase::Playing;
        log::info!(
            "session started (from {}): {} bricks",
            previous.as_str(),
            self.bricks_remaining
        );
    }

    /// Apply one input event. Paddle moves are honored in every phase.
    pub fn apply_action(&mut self, action: PlayerAction) -> Flow {
        match action {
            PlayerAction::MoveLeft => self.move_paddle(-self.layout.paddle_step),
            PlayerAction::MoveRight => self.move_paddle(self.layout.paddle_step),
            PlayerAction::Restart => self.restart(),
            PlayerAction::Quit => {
                log::info!("quit requested (score {})", self.score);
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    /// Shift the paddle by `dx`, clamped to `[0, screen_width - paddle_width]`.
    pub fn move_paddle(&mut self, dx: i32) {
        self.paddle_x = self
            .paddle_x
            .saturating_add(dx)
            .clamp(0, self.layout.paddle_max_x());
    }

    /// Advance one fixed step.
    ///
    /// Outside `Playing` this only requests a redraw. The paddle test is a
    /// plain box overlap and does not push the ball back out, so a fast ball
    /// can bounce twice off the paddle on consecutive ticks.
    pub fn tick(&mut self) {
        self.redraw_requested = true;
        if self.phase != Phase::Playing {
            return;
        }

        if self.ball_rect().intersects(&self.paddle_rect()) {
            self.ball.bounce(BounceAxis::Vertical);
        }

        if let Some(hit) =
            self.grid
                .resolve_collision(self.ball.x, self.ball.y, self.layout.ball_size)
        {
            self.apply_hit(hit);
        }

        self.ball.x += self.ball.dx;
        self.ball.y += self.ball.dy;

        if self.ball.x < 0 || self.ball.x > self.layout.screen_width - self.layout.ball_size {
            self.ball.bounce(BounceAxis::Horizontal);
        }
        if self.ball.y < 0 {
            self.ball.bounce(BounceAxis::Vertical);
        }
    }

    fn apply_hit(&mut self, hit: BrickHit) {
        self.score += hit.points;
        // Each hit clears a distinct non-empty cell, so this cannot underflow.
        self.bricks_remaining -= 1;
        self.ball.bounce(hit.axis);
        log::debug!(
            "brick ({}, {}) {:?} +{} -> score {}, {} left",
            hit.row,
            hit.col,
            hit.kind,
            hit.points,
            self.score,
            self.bricks_remaining
        );
    }

    /// Loss/win detection. Only a `Playing` session transitions; the loss
    /// check runs first.
    pub fn evaluate(&mut self) -> Phase {
        if self.phase == Phase::Playing {
            if self.layout.is_past_loss_line(self.ball.y) {
                self.finish(Phase::GameOver);
            } else if self.bricks_remaining == 0 {
                self.finish(Phase::Won);
            }
        }
        self.phase
    }

    fn finish(&mut self, phase: Phase) {
        self.phase = phase;
        self.ball.freeze();
        log::info!("session ended: {} with score {}", phase.as_str(), self.score);
    }

    /// Returns whether a redraw was requested since the last call, and clears it.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Evaluate loss/win, then draw the frame.
    pub fn present<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.evaluate();
        draw_frame(self, surface);
        self.redraw_requested = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(rows: u16, cols: u16) -> GameState {
        let mut g = GameState::new(Layout::new(1000, 1000, rows, cols));
        g.restart();
        g
    }

    #[test]
    fn new_game_waits_for_restart() {
        let mut g = GameState::new(Layout::new(1000, 1000, 15, 15));
        assert_eq!(g.phase(), Phase::NotPlaying);
        assert_eq!(g.bricks_remaining(), 225);
        assert!(g.take_redraw_request());
        assert!(!g.take_redraw_request());

        let before = g.ball();
        g.tick();
        assert_eq!(g.ball(), before);
        assert!(g.take_redraw_request());
        assert_eq!(g.evaluate(), Phase::NotPlaying);
    }

    #[test]
    fn tick_integrates_start_direction() {
        let mut g = playing(2, 2);
        g.tick();
        let b = g.ball();
        assert_eq!((b.x, b.y), (249, 498));
        assert_eq!((b.dx, b.dy), (-1, -2));
    }

    #[test]
    fn side_walls_invert_dx_after_moving() {
        let mut g = playing(1, 1);
        g.place_ball(Ball { x: 0, y: 500, dx: -1, dy: -2 });
        g.tick();
        let b = g.ball();
        assert_eq!(b.x, -1);
        assert_eq!(b.dx, 1);

        let max = 1000 - g.layout().ball_size;
        g.place_ball(Ball { x: max, y: 500, dx: 1, dy: 2 });
        g.tick();
        assert_eq!(g.ball().dx, -1);
    }

    #[test]
    fn ceiling_inverts_dy_but_floor_does_not() {
        let mut g = playing(1, 1);
        g.place_ball(Ball { x: 50, y: 1, dx: 1, dy: -2 });
        g.tick();
        assert_eq!(g.ball().dy, 2);

        g.place_ball(Ball { x: 50, y: 990, dx: 1, dy: 2 });
        g.tick();
        assert_eq!(g.ball().dy, 2);
    }

    #[test]
    fn paddle_overlap_inverts_dy() {
        let mut g = playing(1, 1);
        let p = g.paddle_rect();
        g.place_ball(Ball { x: p.x + 10, y: p.y - 5, dx: 1, dy: 2 });
        g.tick();
        assert_eq!(g.ball().dy, -2);
        assert_eq!(g.ball().y, p.y - 7);
    }

    #[test]
    fn brick_hit_scores_and_bounces() {
        let mut g = playing(2, 2);
        g.place_ball(Ball { x: 300, y: 290, dx: 1, dy: -2 });
        g.tick();
        assert_eq!(g.score(), 20);
        assert_eq!(g.bricks_remaining(), 3);
        assert_eq!(g.ball().dy, 2);
        assert_eq!(g.ball().y, 292);
    }

    #[test]
    fn moves_are_clamped() {
        let mut g = playing(1, 1);
        for _ in 0..200 {
            g.apply_action(PlayerAction::MoveLeft);
        }
        assert_eq!(g.paddle_x(), 0);
        for _ in 0..200 {
            g.apply_action(PlayerAction::MoveRight);
        }
        assert_eq!(g.paddle_x(), 1000 - 142);
    }

    #[test]
    fn quit_is_reported_to_driver() {
        let mut g = playing(1, 1);
        assert_eq!(g.apply_action(PlayerAction::MoveLeft), Flow::Continue);
        assert_eq!(g.apply_action(PlayerAction::Quit), Flow::Quit);
    }

    #[test]
    fn loss_freezes_ball_and_sticks() {
        let mut g = playing(1, 1);
        g.place_ball(Ball { x: 500, y: 951, dx: 1, dy: 2 });
        assert_eq!(g.evaluate(), Phase::GameOver);
        assert_eq!((g.ball().dx, g.ball().dy), (0, 0));

        g.tick();
        assert_eq!(g.ball().y, 951);
        assert_eq!(g.evaluate(), Phase::GameOver);
    }

    #[test]
    fn loss_takes_precedence_over_win() {
        let mut g = playing(1, 1);
        g.place_ball(Ball { x: 400, y: 150, dx: 0, dy: 1 });
        g.tick();
        assert_eq!(g.bricks_remaining(), 0);
        g.place_ball(Ball { x: 400, y: 960, dx: 0, dy: 1 });
        assert_eq!(g.evaluate(), Phase::GameOver);
    }
}
