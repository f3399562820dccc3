//! Square of 9 Grid
//!
//! Spiral grid of consecutive integers with an angular index around its center.
//!
//! # Layout
//!
//! The grid is an N×N matrix. The value 1 sits in the center cell `(N/2, N/2)`
//! and the integers grow outward in a square spiral with leg lengths
//! 1, 1, 2, 2, 3, 3, ... The first leg steps left, then up, then right, then
//! down, so the ring around the center reads:
//!
//! ```text
//! 3 4 5
//! 2 1 6
//! 9 8 7
//! ```
//!
//! # Grid Angles
//!
//! Every cell has an angle relative to the center in the grid's own convention:
//! `(atan2(dy, dx) + 90) mod 360` with `dx` the column offset and `dy` the row
//! offset. Straight up is 0°, right is 90°, down is 180°, left is 270°.
//!
//! # Spokes
//!
//! A reference angle defines 8 spokes, 45° apart. The spoke search returns every
//! value whose grid angle lies within a tolerance of one of them.

mod angle;
mod error;
mod index;
mod nearest;
mod position;
mod spiral;
mod spokes;

pub use angle::{circular_distance, grid_angle, normalize_degrees};
pub use error::{GridError, Result};
pub use index::{IndexedGrid, PositionIndex};
pub use nearest::nearest_value;
pub use position::Position;
pub use spiral::{leg_length, Direction, SpiralGrid, SpiralWalk};
pub use spokes::{spoke_values, Spokes};

/// Number of spokes radiating from a reference angle.
pub const SPOKE_COUNT: usize = 8;

/// Angular spacing between adjacent spokes, in degrees.
pub const SPOKE_SPACING: f64 = 45.0;

/// Default angular tolerance around a spoke or cardinal direction, in degrees.
pub const DEFAULT_TOLERANCE: f64 = 5.0;

/// The fixed cardinal and intercardinal grid angles.
pub const CARDINAL_ANGLES: [f64; SPOKE_COUNT] = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];

/// Sentinel held by cells the spiral never reached.
pub const EMPTY_CELL: u32 = 0;

// Spokes must cover the full circle exactly once
const _: () = assert!(SPOKE_COUNT * 45 == 360);
