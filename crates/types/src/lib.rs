//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be
//! used by the simulation, the terminal shell, and tests alike.
//!
//! # Gameplay Constants
//!
//! Distances are in logical screen pixels, times in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 8 | Fixed simulation interval |
//! | `PADDLE_STEP` | 20 | Paddle movement per key event |
//! | `PADDLE_HEIGHT` | 8 | Paddle thickness |
//! | `BALL_START_DIR` | (-1, -2) | Ball direction at the start of a session |
//! | `WALL_THICKNESS` | 3 | Drawn width of the top/left/right walls |
//! | `BRICK_BORDER` | 2 | Stroke width around each brick |
//!
//! Everything else (brick size, paddle width, ball diameter, margins) scales
//! with the screen and is computed once by `brick_breaker_core::Layout`.
//!
//! # Examples
//!
//! ```
//! use brick_breaker_types::{BrickKind, Phase};
//!
//! assert_eq!(BrickKind::Standard.points(), 5);
//! assert_eq!(BrickKind::Bonus.points(), 20);
//! assert!(BrickKind::Empty.is_empty());
//!
//! assert!(Phase::Won.is_terminal());
//! assert!(!Phase::Playing.is_terminal());
//! ```

/// Fixed timestep interval in milliseconds (8ms, 125 ticks per second)
pub const TICK_MS: u32 = 8;

/// Paddle movement per delivered move event
pub const PADDLE_STEP: i32 = 20;

/// Paddle thickness
pub const PADDLE_HEIGHT: i32 = 8;

/// Ball direction `(dx, dy)` at the start of every session
pub const BALL_START_DIR: (i32, i32) = (-1, -2);

/// Thickness of the drawn top/left/right walls
pub const WALL_THICKNESS: i32 = 3;

/// Stroke width of the border drawn around each brick
pub const BRICK_BORDER: i32 = 2;

/// Default number of brick rows
pub const DEFAULT_ROWS: u16 = 15;

/// Default number of brick columns
pub const DEFAULT_COLS: u16 = 15;

/// Content of one brick grid cell
///
/// A cell only ever goes from a brick kind to `Empty`; bricks never respawn
/// within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BrickKind {
    #[default]
    Empty,
    /// Blue brick, 5 points
    Standard,
    /// Pink brick, 20 points
    Bonus,
}

impl BrickKind {
    /// Points awarded for destroying a brick of this kind
    pub fn points(&self) -> u32 {
        match self {
            BrickKind::Empty => 0,
            BrickKind::Standard => 5,
            BrickKind::Bonus => 20,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, BrickKind::Empty)
    }

    /// Fill color used when rendering
    pub fn color(&self) -> Option<Rgb> {
        match self {
            BrickKind::Empty => None,
            BrickKind::Standard => Some(palette::STANDARD_BRICK),
            BrickKind::Bonus => Some(palette::BONUS_BRICK),
        }
    }
}

/// Coarse game state gating whether physics advances
///
/// `NotPlaying -> Playing -> {GameOver, Won}`. `Playing` is only entered through
/// an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    NotPlaying,
    Playing,
    GameOver,
    Won,
}

impl Phase {
    /// `GameOver` and `Won` freeze the ball until the next restart.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::GameOver | Phase::Won)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NotPlaying => "notPlaying",
            Phase::Playing => "playing",
            Phase::GameOver => "gameOver",
            Phase::Won => "won",
        }
    }
}

/// Which ball direction component a collision inverts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BounceAxis {
    /// Invert `dx`
    Horizontal,
    /// Invert `dy`
    Vertical,
}

/// Discrete input events delivered by the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Move the paddle one step left
    MoveLeft,
    /// Move the paddle one step right
    MoveRight,
    /// Start a fresh session (from any phase)
    Restart,
    /// Terminate the program
    Quit,
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Fixed game colors.
pub mod palette {
    use super::Rgb;

    pub const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
    pub const WALL: Rgb = Rgb::new(255, 255, 0);
    pub const TEXT: Rgb = Rgb::new(255, 255, 255);
    pub const PADDLE: Rgb = Rgb::new(0, 255, 0);
    pub const BALL: Rgb = Rgb::new(255, 0, 0);
    pub const STANDARD_BRICK: Rgb = Rgb::new(30, 144, 255);
    pub const BONUS_BRICK: Rgb = Rgb::new(255, 105, 180);
    pub const BRICK_BORDER: Rgb = Rgb::new(0, 0, 0);
    pub const GAME_OVER: Rgb = Rgb::new(255, 0, 0);
    pub const WON: Rgb = Rgb::new(0, 255, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brick_points_match_kind() {
        assert_eq!(BrickKind::Empty.points(), 0);
        assert_eq!(BrickKind::Standard.points(), 5);
        assert_eq!(BrickKind::Bonus.points(), 20);
    }

    #[test]
    fn empty_brick_has_no_color() {
        assert_eq!(BrickKind::Empty.color(), None);
        assert_eq!(BrickKind::Standard.color(), Some(Rgb::new(30, 144, 255)));
        assert_eq!(BrickKind::Bonus.color(), Some(Rgb::new(255, 105, 180)));
    }

    #[test]
    fn only_end_states_are_terminal() {
        assert!(!Phase::NotPlaying.is_terminal());
        assert!(!Phase::Playing.is_terminal());
        assert!(Phase::GameOver.is_terminal());
        assert!(Phase::Won.is_terminal());
    }

    #[test]
    fn start_direction_heads_up_and_left() {
        assert!(BALL_START_DIR.0 < 0);
        assert!(BALL_START_DIR.1 < 0);
    }
}
