//! Reverse lookup from values to cells and their grid angles.
//!
//! Spoke searches ask for the angle of every value in the grid, once per
//! spoke. The index resolves each value's position and angle once, up front,
//! so those lookups are plain vector reads.

use crate::error::Result;
use crate::spokes::{spoke_values, Spokes};
use crate::{circular_distance, nearest_value, Position, SpiralGrid, CARDINAL_ANGLES};

/// Value → position and value → angle tables for one grid.
#[derive(Debug, Clone)]
pub struct PositionIndex {
    /// `positions[v]` is the cell holding `v`; slot 0 is unused.
    positions: Vec<Option<Position>>,
    /// `angles[v]` is the grid angle of `v`; slot 0 is unused.
    angles: Vec<Option<f64>>,
}

impl PositionIndex {
    /// Index every populated cell of a grid.
    pub fn new(grid: &SpiralGrid) -> Self {
        let slots = grid.size() * grid.size() + 1;
        let mut positions = vec![None; slots];
        let mut angles = vec![None; slots];
        let center = grid.center();

        for (position, value) in grid.cells() {
            positions[value as usize] = Some(position);
            angles[value as usize] = Some(position.angle_from(&center));
        }

        Self { positions, angles }
    }

    /// Cell holding `value`, if the grid contains it.
    pub fn position_of(&self, value: u32) -> Option<Position> {
        self.positions.get(value as usize).copied().flatten()
    }

    /// Grid angle of `value`, if the grid contains it.
    pub fn angle_of(&self, value: u32) -> Option<f64> {
        self.angles.get(value as usize).copied().flatten()
    }

    /// Whether `value` lies within `tolerance` degrees of a cardinal or
    /// intercardinal direction. Unknown values never do.
    pub fn is_on_cardinal_direction(&self, value: u32, tolerance: f64) -> bool {
        self.angle_of(value).is_some_and(|angle| {
            CARDINAL_ANGLES
                .iter()
                .any(|&cardinal| circular_distance(angle, cardinal) <= tolerance)
        })
    }

    /// Values with a known angle, ascending, paired with that angle.
    pub fn angles(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.angles
            .iter()
            .enumerate()
            .filter_map(|(value, angle)| angle.map(|a| (value as u32, a)))
    }

    /// Highest value slot covered by the index.
    pub fn capacity(&self) -> u32 {
        (self.angles.len() - 1) as u32
    }
}

/// A spiral grid together with its position index.
///
/// This is the read-only unit shared between callers: built once per size,
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct IndexedGrid {
    grid: SpiralGrid,
    index: PositionIndex,
}

impl IndexedGrid {
    /// Build the grid for `size` and index it.
    pub fn build(size: usize) -> Result<Self> {
        Ok(Self::from_grid(SpiralGrid::build(size)?))
    }

    /// Index an existing grid.
    pub fn from_grid(grid: SpiralGrid) -> Self {
        let index = PositionIndex::new(&grid);
        Self { grid, index }
    }

    /// The underlying grid.
    pub fn grid(&self) -> &SpiralGrid {
        &self.grid
    }

    /// The position index.
    pub fn index(&self) -> &PositionIndex {
        &self.index
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn center(&self) -> Position {
        self.grid.center()
    }

    pub fn populated(&self) -> usize {
        self.grid.populated()
    }

    pub fn value_at(&self, position: Position) -> Option<u32> {
        self.grid.value_at(position)
    }

    pub fn position_of(&self, value: u32) -> Option<Position> {
        self.index.position_of(value)
    }

    pub fn angle_of(&self, value: u32) -> Option<f64> {
        self.index.angle_of(value)
    }

    pub fn is_on_cardinal_direction(&self, value: u32, tolerance: f64) -> bool {
        self.index.is_on_cardinal_direction(value, tolerance)
    }

    /// Grid value closest to `target`.
    pub fn nearest(&self, target: f64) -> Option<u32> {
        nearest_value(&self.grid, target)
    }

    /// Ascending values on the 8 spokes of `reference_angle`.
    pub fn spoke_values(&self, reference_angle: f64, tolerance: f64) -> Vec<u32> {
        spoke_values(&self.index, &Spokes::from_reference(reference_angle), tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_TOLERANCE;

    fn grid20() -> IndexedGrid {
        IndexedGrid::build(20).unwrap()
    }

    #[test]
    fn center_position_and_angle() {
        let grid = grid20();
        assert_eq!(grid.position_of(1), Some(Position::new(10, 10)));
        assert_eq!(grid.angle_of(1), Some(0.0));
    }

    #[test]
    fn unknown_values() {
        let grid = grid20();
        assert_eq!(grid.position_of(0), None);
        assert_eq!(grid.position_of(1000), None);
        assert_eq!(grid.angle_of(1000), None);
        assert!(!grid.is_on_cardinal_direction(1000, DEFAULT_TOLERANCE));
    }

    #[test]
    fn first_ring_angles() {
        let grid = grid20();
        let expected = [
            (2, 270.0),
            (3, 315.0),
            (4, 0.0),
            (5, 45.0),
            (6, 90.0),
            (7, 135.0),
            (8, 180.0),
            (9, 225.0),
        ];
        for (value, angle) in expected {
            assert_eq!(grid.angle_of(value), Some(angle), "value {}", value);
        }
    }

    #[test]
    fn off_axis_angle() {
        // 10 sits two columns left and one row down of center
        let grid = grid20();
        assert_eq!(grid.position_of(10), Some(Position::new(11, 8)));
        let angle = grid.angle_of(10).unwrap();
        assert!((angle - 243.434_948_822_922).abs() < 1e-9);
        assert!(!grid.is_on_cardinal_direction(10, DEFAULT_TOLERANCE));
    }

    #[test]
    fn position_matches_grid() {
        let grid = grid20();
        for value in 1..=400 {
            let position = grid.position_of(value).unwrap();
            assert_eq!(grid.value_at(position), Some(value));
        }
    }

    #[test]
    fn straight_up_is_cardinal() {
        let grid = grid20();
        assert!(grid.is_on_cardinal_direction(1, DEFAULT_TOLERANCE));
        for steps in 1..=10 {
            let value = grid.value_at(Position::new(10 - steps, 10)).unwrap();
            assert_eq!(grid.angle_of(value), Some(0.0));
            assert!(grid.is_on_cardinal_direction(value, DEFAULT_TOLERANCE));
        }
    }

    #[test]
    fn tolerance_widens_cardinal_window() {
        let grid = grid20();
        // 243.43° is 18.43° from 225°
        assert!(!grid.is_on_cardinal_direction(10, 18.0));
        assert!(grid.is_on_cardinal_direction(10, 18.5));
    }

    #[test]
    fn angles_iterator_is_ascending() {
        let grid = IndexedGrid::build(5).unwrap();
        let values: Vec<u32> = grid.index().angles().map(|(v, _)| v).collect();
        assert_eq!(values, (1..=25).collect::<Vec<_>>());
        assert_eq!(grid.index().capacity(), 25);
    }
}
