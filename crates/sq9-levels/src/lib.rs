//! Square of 9 Price Levels
//!
//! Up and down price levels derived from a Square of 9 spiral and a
//! reference angle (conventionally the sun's ecliptic longitude).
//!
//! # Method
//!
//! A price is folded into one 360 cycle and scaled by 10 onto the spiral's
//! integers. The reference angle fixes 8 spokes across the grid; the spoke
//! values just above and below the price's position become the levels, mapped
//! back into the price's own cycle.
//!
//! # Architecture
//!
//! - **GridCache**: one read-only grid per size, built on first use
//! - **LevelExtractor**: the pure extraction step, never fails
//! - **LevelCalculator**: input checks, configuration, collaborator seams
//! - **Breaches**: detect levels crossed between two prices
//!
//! # Example
//!
//! ```
//! use sq9_levels::{LevelCalculator, LevelConfig};
//!
//! let calculator = LevelCalculator::new(LevelConfig::default()).unwrap();
//! let levels = calculator.compute(100.0, 0.0).unwrap();
//!
//! assert_eq!(levels.up_levels().len(), 5);
//! assert!(levels.up_prices().all(|p| p > 100.0));
//! assert!(levels.down_prices().all(|p| p < 100.0));
//! ```

mod breach;
mod cache;
mod calculator;
mod config;
mod error;
mod extract;
mod level;
mod sources;

pub use breach::{check_breaches, Breach, BreachDirection, BreachReport};
pub use cache::GridCache;
pub use calculator::{compute_levels, LevelCalculator, TickerLevels};
pub use config::{
    LevelConfig, DEFAULT_GRID_SIZE, DEFAULT_LEVEL_COUNT, ENV_GRID_SIZE, ENV_LEVEL_COUNT,
    ENV_TOLERANCE, MIN_GRID_CELLS,
};
pub use error::{Error, Result};
pub use extract::{
    anchor_index, cycle_offset, scale_price, to_price, LevelExtractor, PRICE_CYCLE, PRICE_SCALE,
};
pub use level::{Level, LevelResult};
pub use sources::{FixedAngle, PriceSource, ReferenceAngleSource};

pub use sq9_grid::{IndexedGrid, DEFAULT_TOLERANCE};
