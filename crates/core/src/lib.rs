//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole simulation: layout, brick grid, ball physics,
//! scoring, and the phase state machine. It has **no dependencies** on
//! terminals, timers, or input devices, so it can be driven by a real frame
//! timer, a test harness feeding synthetic ticks, or a benchmark.
//!
//! # Module Structure
//!
//! - [`geom`]: axis-aligned rectangles used for every collision test
//! - [`layout`]: screen-scaled sizes and positions, computed once per session
//! - [`grid`]: the brick grid and ball-vs-brick resolution
//! - [`game_state`]: paddle, ball, score, and the phase state machine
//! - [`surface`]: the render contract plus a recording surface
//! - [`render`]: frame composition
//!
//! # Per-tick order
//!
//! 1. Paddle overlap inverts `dy`
//! 2. At most one brick is destroyed (score, count, and bounce applied)
//! 3. `x += dx; y += dy`
//! 4. Side walls invert `dx`, the ceiling inverts `dy`; there is no floor
//! 5. A redraw is requested
//!
//! Loss (ball below 95% of the screen height) and win (no bricks left) are
//! detected when the frame is presented, not during the tick.
//!
//! # Example
//!
//! ```
//! use brick_breaker_core::{DrawList, GameState, Layout};
//! use brick_breaker_types::{Phase, PlayerAction};
//!
//! let mut game = GameState::new(Layout::new(1000, 1000, 2, 2));
//! game.apply_action(PlayerAction::Restart);
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! for _ in 0..10 {
//!     game.tick();
//! }
//!
//! let mut frame = DrawList::new();
//! game.present(&mut frame);
//! assert!(frame.contains_text("Score: 0"));
//! ```

pub mod game_state;
pub mod geom;
pub mod grid;
pub mod layout;
pub mod render;
pub mod surface;

pub use brick_breaker_types as types;

// Re-export commonly used types for convenience
pub use game_state::{Ball, Flow, GameState};
pub use geom::Rect;
pub use grid::{BrickGrid, BrickHit};
pub use layout::Layout;
pub use render::draw_frame;
pub use surface::{DrawCommand, DrawList, Surface, TextAlign, TextStyle};
