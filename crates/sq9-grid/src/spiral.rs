//! Square spiral construction.
//!
//! The spiral starts at the center cell and walks legs of growing length,
//! turning a quarter after each leg:
//!
//! - Leg 0: 1 step left
//! - Leg 1: 1 step up
//! - Leg 2: 2 steps right
//! - Leg 3: 2 steps down
//! - Leg n: `n / 2 + 1` steps, direction `n mod 4`
//!
//! Every step writes the next integer. A step that would leave the grid ends
//! the walk on the spot; cells it never reached keep the empty sentinel.

use crate::error::{GridError, Result};
use crate::{Position, EMPTY_CELL};

/// Walking direction of a spiral leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Column - 1
    Left,
    /// Row - 1
    Up,
    /// Column + 1
    Right,
    /// Row + 1
    Down,
}

impl Direction {
    /// Leg order, repeated for the whole spiral.
    pub const CYCLE: [Self; 4] = [Self::Left, Self::Up, Self::Right, Self::Down];

    /// `(dx, dy)` step for this direction (column, row).
    pub const fn delta(&self) -> (i64, i64) {
        match self {
            Self::Left => (-1, 0),
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
        }
    }

    /// Direction of the given leg.
    pub const fn of_leg(leg: u64) -> Self {
        Self::CYCLE[(leg % 4) as usize]
    }
}

/// Number of steps in leg `n` (0-indexed): 1, 1, 2, 2, 3, 3, ...
#[inline]
pub const fn leg_length(leg: u64) -> u64 {
    leg / 2 + 1
}

/// Iterator over cell positions in spiral order, starting at the center.
///
/// The n-th position yielded holds the value `n + 1`. The walk ends after
/// `size²` positions or as soon as a step would leave the grid, whichever
/// comes first.
#[derive(Debug, Clone)]
pub struct SpiralWalk {
    size: usize,
    remaining: u64,
    current: Option<Position>,
    leg: u64,
    taken: u64,
    halted: bool,
}

impl SpiralWalk {
    /// Walk a grid with the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            remaining: (size as u64).saturating_mul(size as u64),
            current: None,
            leg: 0,
            taken: 0,
            halted: false,
        }
    }

    /// Whether the walk stopped at the grid boundary before placing `size²` values.
    pub fn halted(&self) -> bool {
        self.halted
    }
}

impl Iterator for SpiralWalk {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.halted {
            return None;
        }

        let next = match self.current {
            None => Position::center_of(self.size),
            Some(current) => {
                let (dx, dy) = Direction::of_leg(self.leg).delta();
                let Some(next) = current.step(dx, dy, self.size) else {
                    self.halted = true;
                    return None;
                };

                self.taken += 1;
                if self.taken == leg_length(self.leg) {
                    self.leg += 1;
                    self.taken = 0;
                }
                next
            }
        };

        self.current = Some(next);
        self.remaining -= 1;
        Some(next)
    }
}

impl std::iter::FusedIterator for SpiralWalk {}

/// An immutable N×N spiral of integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpiralGrid {
    size: usize,
    cells: Vec<u32>,
    populated: usize,
}

impl SpiralGrid {
    /// Build the spiral for a grid of `size × size` cells.
    pub fn build(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(GridError::InvalidSize(size));
        }
        let cell_count = size
            .checked_mul(size)
            .filter(|&n| u32::try_from(n).is_ok())
            .ok_or(GridError::TooLarge(size))?;

        let mut cells = vec![EMPTY_CELL; cell_count];
        let mut walk = SpiralWalk::new(size);
        let mut populated = 0;

        for (value, position) in (1u32..).zip(walk.by_ref()) {
            cells[position.row * size + position.col] = value;
            populated += 1;
        }

        if walk.halted() {
            tracing::debug!(size, populated, "spiral reached the grid boundary early");
        }

        Ok(Self {
            size,
            cells,
            populated,
        })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Center cell, which always holds 1.
    pub fn center(&self) -> Position {
        Position::center_of(self.size)
    }

    /// Number of cells the spiral reached.
    pub fn populated(&self) -> usize {
        self.populated
    }

    /// Whether every cell holds a value.
    pub fn is_complete(&self) -> bool {
        self.populated == self.cells.len()
    }

    /// Largest value placed.
    pub fn max_value(&self) -> u32 {
        self.populated as u32
    }

    /// Value at a position, `None` outside the grid or for unreached cells.
    pub fn value_at(&self, position: Position) -> Option<u32> {
        if position.row >= self.size || position.col >= self.size {
            return None;
        }
        match self.cells[position.row * self.size + position.col] {
            EMPTY_CELL => None,
            value => Some(value),
        }
    }

    /// Rows of raw cell values, top to bottom. Unreached cells read as `EMPTY_CELL`.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size)
    }

    /// Populated cells in row-major order.
    pub fn cells(&self) -> impl DoubleEndedIterator<Item = (Position, u32)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &value)| value != EMPTY_CELL)
            .map(move |(i, &value)| (Position::new(i / size, i % size), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leg_lengths() {
        let lengths: Vec<_> = (0..8).map(leg_length).collect();
        assert_eq!(lengths, vec![1, 1, 2, 2, 3, 3, 4, 4]);
    }

    #[test]
    fn direction_cycle() {
        assert_eq!(Direction::of_leg(0), Direction::Left);
        assert_eq!(Direction::of_leg(1), Direction::Up);
        assert_eq!(Direction::of_leg(2), Direction::Right);
        assert_eq!(Direction::of_leg(3), Direction::Down);
        assert_eq!(Direction::of_leg(4), Direction::Left);
    }

    #[test]
    fn zero_size_rejected() {
        assert_eq!(SpiralGrid::build(0), Err(GridError::InvalidSize(0)));
    }

    #[test]
    fn oversized_rejected() {
        assert_eq!(SpiralGrid::build(70_000), Err(GridError::TooLarge(70_000)));
    }

    #[test]
    fn single_cell() {
        let grid = SpiralGrid::build(1).unwrap();
        assert_eq!(grid.value_at(Position::new(0, 0)), Some(1));
        assert!(grid.is_complete());
    }

    #[test]
    fn three_by_three_layout() {
        let grid = SpiralGrid::build(3).unwrap();
        let rows: Vec<Vec<u32>> = grid.rows().map(|r| r.to_vec()).collect();
        assert_eq!(rows, vec![vec![3, 4, 5], vec![2, 1, 6], vec![9, 8, 7]]);
    }

    #[test]
    fn size_twenty_around_center() {
        let grid = SpiralGrid::build(20).unwrap();
        assert_eq!(grid.center(), Position::new(10, 10));
        assert_eq!(grid.value_at(Position::new(10, 10)), Some(1));
        assert_eq!(grid.value_at(Position::new(10, 9)), Some(2)); // left
        assert_eq!(grid.value_at(Position::new(9, 9)), Some(3)); // up-left
        assert_eq!(grid.value_at(Position::new(9, 10)), Some(4)); // up
        assert_eq!(grid.rows().count(), 20);
        assert!(grid.rows().all(|row| row.len() == 20));
    }

    #[test]
    fn center_holds_one_for_all_sizes() {
        for size in 1..=25 {
            let grid = SpiralGrid::build(size).unwrap();
            assert_eq!(grid.value_at(grid.center()), Some(1), "size {}", size);
        }
    }

    #[test]
    fn walk_fills_odd_and_even_grids() {
        for size in [1, 2, 3, 4, 7, 8, 20, 150] {
            let grid = SpiralGrid::build(size).unwrap();
            assert!(grid.is_complete(), "size {} populated {}", size, grid.populated());
            assert_eq!(grid.max_value() as usize, size * size);
        }
    }

    #[test]
    fn walk_stops_at_boundary() {
        // Starting away from the center, the first leg runs off the grid.
        let mut walk = SpiralWalk {
            current: Some(Position::new(0, 0)),
            ..SpiralWalk::new(3)
        };
        assert_eq!(walk.next(), None);
        assert!(walk.halted());
        assert_eq!(walk.next(), None);
    }

    #[test]
    fn walk_yields_size_squared_positions() {
        assert_eq!(SpiralWalk::new(6).count(), 36);
        assert_eq!(SpiralWalk::new(0).count(), 0);
    }

    #[test]
    fn out_of_bounds_lookup() {
        let grid = SpiralGrid::build(5).unwrap();
        assert_eq!(grid.value_at(Position::new(5, 0)), None);
        assert_eq!(grid.value_at(Position::new(0, 5)), None);
    }

    #[test]
    fn cells_are_row_major() {
        let grid = SpiralGrid::build(3).unwrap();
        let values: Vec<u32> = grid.cells().map(|(_, v)| v).collect();
        assert_eq!(values, vec![3, 4, 5, 2, 1, 6, 9, 8, 7]);
        let (first, _) = grid.cells().next().unwrap();
        assert_eq!(first, Position::new(0, 0));
    }
}
