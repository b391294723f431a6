// error.rs - Error type for the Life engine

/// Errors returned by [`Life`](crate::Life) operations.
///
/// A rejected call never touches the engine's buffers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LifeError {
    /// Width or height is zero, or `width * height` does not fit in memory.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Seed liveness does not cover the grid exactly.
    #[error("seed has {actual} cells, grid needs {expected}")]
    InvalidLength { expected: usize, actual: usize },

    /// Coordinate outside `[0, width) x [0, height)` passed to a mutating call.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Fill probability is not a finite value in `0.0..=1.0`.
    #[error("fill probability {0} is not within 0.0..=1.0")]
    InvalidProbability(f64),
}
