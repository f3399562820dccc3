//! Error types for sq9-levels.

use sq9_grid::GridError;
use thiserror::Error;

/// Result type for sq9-levels operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers. All of them are precondition violations or
/// missing collaborator data; degraded level results are not errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The grid could not be built.
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// The grid cannot cover the scaled 0-360 price range.
    #[error("grid size {size} too small: {cells} cells, need at least {min}")]
    GridTooSmall { size: usize, cells: usize, min: usize },

    /// Price is NaN or infinite.
    #[error("price must be finite, got {0}")]
    NonFinitePrice(f64),

    /// Reference angle is NaN or infinite.
    #[error("reference angle must be finite, got {0}")]
    NonFiniteAngle(f64),

    /// Spoke tolerance is negative, non-finite or wide enough to overlap spokes.
    #[error("invalid spoke tolerance: {0}")]
    InvalidTolerance(f64),

    /// A configuration value could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The price source had no usable price for a symbol.
    #[error("price unavailable for {0}")]
    PriceUnavailable(String),

    /// The reference-angle source had no usable angle.
    #[error("reference angle unavailable")]
    AngleUnavailable,
}
