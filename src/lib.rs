//! Brick breaker (workspace facade crate).
//!
//! Re-exports the member crates under short names and hosts the binary's
//! startup concerns: environment configuration and logging.

pub mod config;
pub mod logging;

pub use brick_breaker_core as core;
pub use brick_breaker_input as input;
pub use brick_breaker_term as term;
pub use brick_breaker_types as types;

pub use config::Config;
