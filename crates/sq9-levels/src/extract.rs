//! Level extraction.
//!
//! Maps a price into grid space, finds where it falls among the spoke values
//! of a reference angle, and reads the neighboring spoke values back out as
//! price levels:
//!
//! 1. `scaled = (price mod 360) × 10`
//! 2. `nearest` = grid value closest to `scaled`
//! 3. `spokes` = ascending spoke values of the reference angle
//! 4. anchor = index of `nearest` in `spokes`, or of the closest spoke value
//! 5. up = the `n` spoke values after the anchor, down = the `n` before it
//! 6. `level = value / 10 + floor(price / 360) × 360`
//!
//! The anchor itself belongs to neither side.

use std::ops::Range;

use sq9_grid::{IndexedGrid, DEFAULT_TOLERANCE};

use crate::LevelResult;

/// Grid values per unit of price.
pub const PRICE_SCALE: f64 = 10.0;

/// Price span folded onto the grid.
pub const PRICE_CYCLE: f64 = 360.0;

/// Price reduced to one cycle and scaled into grid space.
#[inline]
pub fn scale_price(price: f64) -> f64 {
    price.rem_euclid(PRICE_CYCLE) * PRICE_SCALE
}

/// Start of the 360 cycle containing `price`.
#[inline]
pub fn cycle_offset(price: f64) -> f64 {
    (price / PRICE_CYCLE).floor() * PRICE_CYCLE
}

/// Grid value mapped back into the price's cycle.
#[inline]
pub fn to_price(value: u32, price: f64) -> f64 {
    value as f64 / PRICE_SCALE + cycle_offset(price)
}

/// Position of `nearest` among ascending `spokes`.
///
/// An exact match wins; otherwise the spoke value with the smallest absolute
/// difference, the lower one on ties. `spokes` must not be empty.
pub fn anchor_index(spokes: &[u32], nearest: u32) -> usize {
    if let Ok(idx) = spokes.binary_search(&nearest) {
        return idx;
    }

    let mut best = 0;
    for (idx, &value) in spokes.iter().enumerate() {
        if value.abs_diff(nearest) < spokes[best].abs_diff(nearest) {
            best = idx;
        }
    }
    best
}

/// Extracts a fixed number of up and down levels from a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelExtractor {
    level_count: usize,
    tolerance: f64,
}

impl Default for LevelExtractor {
    fn default() -> Self {
        Self::new(5, DEFAULT_TOLERANCE)
    }
}

impl LevelExtractor {
    /// Extractor returning `level_count` levels per side, using a spoke
    /// tolerance of `tolerance` degrees.
    pub const fn new(level_count: usize, tolerance: f64) -> Self {
        Self {
            level_count,
            tolerance,
        }
    }

    pub fn level_count(&self) -> usize {
        self.level_count
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Levels around `price` on the spokes of `reference_angle`.
    ///
    /// Never fails: when no anchor can be found the result is all missing.
    pub fn extract(&self, grid: &IndexedGrid, price: f64, reference_angle: f64) -> LevelResult {
        let count = self.level_count;
        let scaled = scale_price(price);

        let Some(nearest) = grid.nearest(scaled) else {
            tracing::warn!(price, scaled, "grid has no values to anchor on");
            return LevelResult::missing(count);
        };

        let spokes = grid.spoke_values(reference_angle, self.tolerance);
        if spokes.is_empty() {
            tracing::warn!(reference_angle, tolerance = self.tolerance, "no grid values on any spoke");
            return LevelResult::missing(count);
        }

        let idx = anchor_index(&spokes, nearest);
        if spokes[idx] != nearest {
            tracing::debug!(nearest, anchor = spokes[idx], "nearest value is off-spoke, anchoring on closest spoke value");
        }

        let (up, down) = level_windows(spokes.len(), idx, count);
        let (up, down) = (&spokes[up], &spokes[down]);

        tracing::debug!(
            price,
            reference_angle,
            scaled,
            nearest,
            spoke_count = spokes.len(),
            up = up.len(),
            down = down.len(),
            "extracted levels"
        );

        LevelResult::from_prices(
            up.iter().map(|&v| to_price(v, price)),
            down.iter().map(|&v| to_price(v, price)),
            count,
        )
    }
}

/// Index ranges of the up and down windows around `anchor`, clipped to `len`.
fn level_windows(len: usize, anchor: usize, count: usize) -> (Range<usize>, Range<usize>) {
    let up_start = anchor.saturating_add(1).min(len);
    let up_end = up_start.saturating_add(count).min(len);
    (up_start..up_end, anchor.saturating_sub(count)..anchor)
}
