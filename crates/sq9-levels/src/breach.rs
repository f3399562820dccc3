//! Level breaches between two prices.
//!
//! An up level is breached when the price moves from below it to at or
//! above it; a down level when the price moves from above it to at or below
//! it. A breach means the stored levels are stale.

use serde::{Deserialize, Serialize};

use crate::LevelResult;

/// Side of the price a breached level was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreachDirection {
    Up,
    Down,
}

/// A single crossed level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breach {
    pub level: f64,
    pub direction: BreachDirection,
}

/// Outcome of comparing two prices against a set of levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreachReport {
    pub previous_price: f64,
    pub current_price: f64,
    pub breached_up: bool,
    pub breached_down: bool,
    /// Up breaches first, then down, each in list order
    pub breached_levels: Vec<Breach>,
}

impl BreachReport {
    /// Whether the levels should be recomputed at the current price.
    pub fn needs_recalculation(&self) -> bool {
        self.breached_up || self.breached_down
    }
}

/// Levels crossed while the price moved from `previous_price` to `current_price`.
///
/// Missing entries never breach.
pub fn check_breaches(levels: &LevelResult, previous_price: f64, current_price: f64) -> BreachReport {
    let up = levels
        .up_prices()
        .filter(|&level| previous_price < level && level <= current_price)
        .map(|level| Breach {
            level,
            direction: BreachDirection::Up,
        });

    let down = levels
        .down_prices()
        .filter(|&level| previous_price > level && level >= current_price)
        .map(|level| Breach {
            level,
            direction: BreachDirection::Down,
        });

    let breached_levels: Vec<Breach> = up.chain(down).collect();

    BreachReport {
        previous_price,
        current_price,
        breached_up: breached_levels
            .iter()
            .any(|b| b.direction == BreachDirection::Up),
        breached_down: breached_levels
            .iter()
            .any(|b| b.direction == BreachDirection::Down),
        breached_levels,
    }
}
