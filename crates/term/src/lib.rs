//! Terminal "game renderer" module.
//!
//! The platform shell's drawing half. The core emits primitive draw calls
//! through [`crate::core::Surface`]; [`Canvas`] rasterizes them into a
//! [`FrameBuffer`] of half-block pixels, and [`TerminalRenderer`] flushes that
//! framebuffer to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render at a fixed logical resolution regardless of terminal size
//! - Only write changed cells after the first frame

pub mod canvas;
pub mod fb;
pub mod renderer;

pub use brick_breaker_core as core;
pub use brick_breaker_types as types;

pub use canvas::{Canvas, PixelScale, MAX_CELL_PX};
pub use fb::{Cell, CellStyle, FrameBuffer, HALF_BLOCK};
pub use renderer::{encode_changes, encode_full, TerminalRenderer};
