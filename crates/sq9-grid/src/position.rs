//! Cell positions in the grid.

use crate::angle::grid_angle;

/// A `(row, col)` cell position, zero-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Center cell of a grid with the given side length.
    pub const fn center_of(size: usize) -> Self {
        Self {
            row: size / 2,
            col: size / 2,
        }
    }

    /// Signed `(dx, dy)` offset from another position (column, row).
    pub fn offset_from(&self, origin: &Self) -> (i64, i64) {
        (
            self.col as i64 - origin.col as i64,
            self.row as i64 - origin.row as i64,
        )
    }

    /// Grid angle of this cell as seen from `center`.
    pub fn angle_from(&self, center: &Self) -> f64 {
        let (dx, dy) = self.offset_from(center);
        grid_angle(dx, dy)
    }

    /// Step one cell by a signed `(dx, dy)` delta, staying inside `[0, size)`.
    pub fn step(&self, dx: i64, dy: i64, size: usize) -> Option<Self> {
        let col = self.col as i64 + dx;
        let row = self.row as i64 + dy;
        let bound = 0..size as i64;
        if bound.contains(&col) && bound.contains(&row) {
            Some(Self::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_uses_integer_division() {
        assert_eq!(Position::center_of(20), Position::new(10, 10));
        assert_eq!(Position::center_of(5), Position::new(2, 2));
        assert_eq!(Position::center_of(1), Position::new(0, 0));
    }

    #[test]
    fn offset_is_column_then_row() {
        let center = Position::new(10, 10);
        assert_eq!(Position::new(9, 12).offset_from(&center), (2, -1));
    }

    #[test]
    fn step_stays_in_bounds() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(-1, 0, 3), None);
        assert_eq!(corner.step(0, -1, 3), None);
        assert_eq!(corner.step(1, 1, 3), Some(Position::new(1, 1)));
        assert_eq!(Position::new(2, 2).step(1, 0, 3), None);
    }

    #[test]
    fn angle_from_center() {
        let center = Position::new(2, 2);
        assert_eq!(center.angle_from(&center), 0.0);
        assert_eq!(Position::new(0, 2).angle_from(&center), 0.0);
        assert_eq!(Position::new(2, 4).angle_from(&center), 90.0);
    }

    #[test]
    fn display_format() {
        assert_eq!(Position::new(3, 7).to_string(), "(3, 7)");
    }
}
