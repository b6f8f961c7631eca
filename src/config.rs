//! Startup configuration from environment variables.
//!
//! Values are read once before the first frame. Unparseable or zero values
//! fall back to the defaults. Pixel scales are clamped to `1..=64`, and the
//! grid is shrunk to fit the screen by `Layout::new`.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BRICKS_ROWS` | 15 | Brick grid rows |
//! | `BRICKS_COLS` | 15 | Brick grid columns |
//! | `BRICKS_TICK_MS` | 8 | Simulation step interval |
//! | `BRICKS_COL_PX` | 8 | Logical pixels per terminal column |
//! | `BRICKS_ROW_PX` | 16 | Logical pixels per terminal row |
//! | `BRICKS_LOG_PATH` | unset | Log file; no logging when unset |

use std::path::PathBuf;
use std::time::Duration;

use crate::term::PixelScale;
use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rows: u16,
    pub cols: u16,
    pub tick_ms: u32,
    pub scale: PixelScale,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_ms: TICK_MS,
            scale: PixelScale::default(),
            log_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let rows = positive(&lookup, "BRICKS_ROWS").unwrap_or(defaults.rows);
        let cols = positive(&lookup, "BRICKS_COLS").unwrap_or(defaults.cols);
        let tick_ms = positive(&lookup, "BRICKS_TICK_MS").unwrap_or(defaults.tick_ms);
        let col_px = positive(&lookup, "BRICKS_COL_PX").unwrap_or(defaults.scale.col_px);
        let row_px = positive(&lookup, "BRICKS_ROW_PX").unwrap_or(defaults.scale.row_px);

        let log_path = lookup("BRICKS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            rows,
            cols,
            tick_ms,
            scale: PixelScale::new(col_px, row_px),
            log_path,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }
}

fn positive<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    lookup(key)
        .and_then(|s| s.trim().parse::<T>().ok())
        .filter(|v| *v > T::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::MAX_CELL_PX;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.rows, 15);
        assert_eq!(config.cols, 15);
        assert_eq!(config.tick_interval(), Duration::from_millis(8));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config_from(&[
            ("BRICKS_ROWS", "6"),
            ("BRICKS_COLS", " 12 "),
            ("BRICKS_TICK_MS", "16"),
            ("BRICKS_COL_PX", "10"),
            ("BRICKS_ROW_PX", "20"),
            ("BRICKS_LOG_PATH", "/tmp/bricks.log"),
        ]);
        assert_eq!(config.rows, 6);
        assert_eq!(config.cols, 12);
        assert_eq!(config.tick_ms, 16);
        assert_eq!(config.scale, PixelScale::new(10, 20));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/bricks.log")));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[
            ("BRICKS_ROWS", "0"),
            ("BRICKS_COLS", "many"),
            ("BRICKS_COL_PX", "-3"),
            ("BRICKS_LOG_PATH", "   "),
        ]);
        assert_eq!(config.rows, 15);
        assert_eq!(config.cols, 15);
        assert_eq!(config.scale.col_px, 8);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn huge_pixel_scale_is_clamped() {
        let config = config_from(&[
            ("BRICKS_COL_PX", "100000000"),
            ("BRICKS_ROW_PX", "2147483647"),
        ]);
        assert_eq!(config.scale.col_px, MAX_CELL_PX);
        assert_eq!(config.scale.row_px, MAX_CELL_PX);
        assert_eq!(config.scale.screen_size(80, 24), (80 * 64, 24 * 64));
    }
}
