//! Logger installation.
//!
//! The game owns the terminal, so log records never go to stderr. When a log
//! path is configured, `env_logger` writes to that file (filter from
//! `RUST_LOG`, default `info`); otherwise no logger is installed and the
//! `log` macros are no-ops.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

pub fn init(log_path: Option<&Path>) -> Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("install logger")?;

    log::info!("logging to {}", path.display());
    Ok(())
}
