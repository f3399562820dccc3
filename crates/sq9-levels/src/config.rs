//! Level computation settings.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sq9_grid::{DEFAULT_TOLERANCE, SPOKE_SPACING};

use crate::error::{Error, Result};
use crate::extract::LevelExtractor;

/// Default grid side length.
pub const DEFAULT_GRID_SIZE: usize = 150;

/// Default number of levels per side.
pub const DEFAULT_LEVEL_COUNT: usize = 5;

/// Cells needed to hold every scaled price in one cycle (360 × 10).
pub const MIN_GRID_CELLS: usize = 3600;

/// Environment variable overriding the grid size.
pub const ENV_GRID_SIZE: &str = "SQ9_GRID_SIZE";

/// Environment variable overriding the level count.
pub const ENV_LEVEL_COUNT: &str = "SQ9_LEVEL_COUNT";

/// Environment variable overriding the spoke tolerance.
pub const ENV_TOLERANCE: &str = "SQ9_TOLERANCE";

/// Settings for a level calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Spiral grid side length
    pub grid_size: usize,

    /// Levels returned on each side
    pub level_count: usize,

    /// Spoke tolerance in degrees
    pub tolerance: f64,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            level_count: DEFAULT_LEVEL_COUNT,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl LevelConfig {
    /// Read overrides from `SQ9_GRID_SIZE`, `SQ9_LEVEL_COUNT` and
    /// `SQ9_TOLERANCE`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LevelConfig::from_env`] with a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            grid_size: parse_var(&lookup, ENV_GRID_SIZE, defaults.grid_size)?,
            level_count: parse_var(&lookup, ENV_LEVEL_COUNT, defaults.level_count)?,
            tolerance: parse_var(&lookup, ENV_TOLERANCE, defaults.tolerance)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the grid covers a full price cycle and spoke windows stay disjoint.
    pub fn validate(&self) -> Result<()> {
        let cells = self.grid_size.saturating_mul(self.grid_size);
        if cells < MIN_GRID_CELLS {
            return Err(Error::GridTooSmall {
                size: self.grid_size,
                cells,
                min: MIN_GRID_CELLS,
            });
        }

        if !self.tolerance.is_finite()
            || self.tolerance < 0.0
            || self.tolerance >= SPOKE_SPACING / 2.0
        {
            return Err(Error::InvalidTolerance(self.tolerance));
        }

        Ok(())
    }

    /// Extractor for these settings.
    pub fn extractor(&self) -> LevelExtractor {
        LevelExtractor::new(self.level_count, self.tolerance)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("invalid {}={:?}: {}", key, raw, e))),
        None => Ok(default),
    }
}
