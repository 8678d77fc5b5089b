//! Generator errors.
//!
//! The taxonomy is narrow: the algorithm has no I/O. An unconnectable
//! layout is not an error; the generator accepts a disconnected result.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Requested grid dimensions are unusable even after odd-rounding.
    #[error("invalid dungeon dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// A coordinate outside the grid was accessed through the checked API.
    /// Inside the generator this condition is an assertion, not an error.
    #[error("cell access out of bounds: ({x}, {y})")]
    OutOfBounds { x: i32, y: i32 },
}
