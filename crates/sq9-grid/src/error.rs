//! Error types for sq9-grid.

use thiserror::Error;

/// Result type for sq9-grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur while building a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid needs at least one cell.
    #[error("invalid grid size: {0} (must be at least 1)")]
    InvalidSize(usize),

    /// The grid would hold more values than fit in a `u32`.
    #[error("grid size {0} is too large")]
    TooLarge(usize),
}
