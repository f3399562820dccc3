//! Grid angle convention and circular arithmetic.
//!
//! Angles here are the grid's own coordinate system, not compass bearings:
//! the raw `atan2` angle is rotated by a fixed +90° so that the cell straight
//! above the center reads 0°.

/// Fixed rotation applied on top of the raw `atan2` angle.
const GRID_OFFSET: f64 = 90.0;

/// Reduce an angle in degrees to `[0, 360)`.
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Grid angle of a cell offset from the center.
///
/// `dx` is the column offset, `dy` the row offset. The center itself is 0°.
pub fn grid_angle(dx: i64, dy: i64) -> f64 {
    if dx == 0 && dy == 0 {
        return 0.0;
    }

    let mut theta = (dy as f64).atan2(dx as f64).to_degrees();
    if theta < 0.0 {
        theta += 360.0;
    }

    (theta + GRID_OFFSET) % 360.0
}

/// Shortest angular distance between two angles, in `[0, 180]`.
///
/// Equivalent to `min(|a - b|, 360 - |a - b|)` for reduced angles; inputs
/// outside `[0, 360)` are reduced first.
#[inline]
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let d = normalize_degrees(a - b);
    d.min(360.0 - d)
}
