//! Nearest grid value to an arbitrary real number.

use crate::SpiralGrid;

/// Populated grid value with the smallest `|value - target|`.
///
/// Cells are scanned from the bottom-right corner back to the top-left
/// (reverse row-major) and ties keep the first value seen. On a grid that
/// winds left first this is the row-major order of the same spiral turned
/// half a circle. `None` only for a grid with no values.
pub fn nearest_value(grid: &SpiralGrid, target: f64) -> Option<u32> {
    let mut best: Option<(u32, f64)> = None;

    for (_, value) in grid.cells().rev() {
        let diff = (value as f64 - target).abs();
        match best {
            Some((_, best_diff)) if diff >= best_diff => {}
            _ => best = Some((value, diff)),
        }
    }

    best.map(|(value, _)| value)
}
