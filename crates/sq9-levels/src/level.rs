//! Level values and the up/down result pair.

use serde::{Deserialize, Serialize};

/// One entry of a level list.
///
/// Serializes as a number, or `null` when missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Level {
    /// A price-space level.
    Price(f64),
    /// No grid value was available for this slot.
    Missing,
}

impl Level {
    /// The price, if present.
    pub fn price(&self) -> Option<f64> {
        match self {
            Self::Price(price) => Some(*price),
            Self::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<Option<f64>> for Level {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Missing, Self::Price)
    }
}

impl From<Level> for Option<f64> {
    fn from(level: Level) -> Self {
        level.price()
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Price(price) => write!(f, "{}", price),
            Self::Missing => write!(f, "-"),
        }
    }
}

/// Up and down levels around a price, each exactly `level_count` long.
///
/// `up_levels` ascend from the closest level above the price. `down_levels`
/// ascend too, so the closest level below comes last among the prices; when
/// fewer levels exist below, the missing entries follow the prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelResult {
    up_levels: Vec<Level>,
    down_levels: Vec<Level>,
}

impl LevelResult {
    /// A result with every entry missing.
    pub fn missing(level_count: usize) -> Self {
        Self {
            up_levels: vec![Level::Missing; level_count],
            down_levels: vec![Level::Missing; level_count],
        }
    }

    /// Pad both lists with missing entries to `level_count`, then keep the
    /// first `level_count` up levels and the last `level_count` down levels.
    pub(crate) fn from_prices<U, D>(up: U, down: D, level_count: usize) -> Self
    where
        U: IntoIterator<Item = f64>,
        D: IntoIterator<Item = f64>,
    {
        let mut up_levels = pad(up, level_count);
        up_levels.truncate(level_count);

        let mut down_levels = pad(down, level_count);
        let excess = down_levels.len() - level_count;
        let down_levels = down_levels.split_off(excess);

        Self {
            up_levels,
            down_levels,
        }
    }

    /// Levels above the price, closest first.
    pub fn up_levels(&self) -> &[Level] {
        &self.up_levels
    }

    /// Levels below the price, ascending.
    pub fn down_levels(&self) -> &[Level] {
        &self.down_levels
    }

    /// Entries per side.
    pub fn level_count(&self) -> usize {
        self.up_levels.len()
    }

    /// Present up prices, in list order.
    pub fn up_prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.up_levels.iter().filter_map(Level::price)
    }

    /// Present down prices, in list order.
    pub fn down_prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.down_levels.iter().filter_map(Level::price)
    }

    /// Whether no entry on either side holds a price.
    pub fn is_all_missing(&self) -> bool {
        self.up_levels
            .iter()
            .chain(&self.down_levels)
            .all(Level::is_missing)
    }
}

fn pad<I: IntoIterator<Item = f64>>(prices: I, level_count: usize) -> Vec<Level> {
    let mut levels: Vec<Level> = prices.into_iter().map(Level::Price).collect();
    if levels.len() < level_count {
        levels.resize(level_count, Level::Missing);
    }
    levels
}
