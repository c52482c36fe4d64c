use thiserror::Error;

/// Errors raised by checked grid operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GridError {
    /// Construction rejected a negative dimension.
    #[error("grid dimensions cannot be negative: {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },

    /// A coordinate fell outside the grid extent.
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}
