//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::PlayerAction`]. There is
//! no key-repeat logic here: every delivered press or auto-repeat event moves
//! the paddle exactly once.

pub mod map;

pub use brick_breaker_types as types;

pub use map::{is_actionable, map_key};
