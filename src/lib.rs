pub mod dims;
pub mod dset;
pub mod logging;
pub mod maze;
pub mod ui;

pub use dims::Dims;

use thiserror::Error;

use crate::maze::algorithms::GenerationError;

/// Top-level error of the `kmaze` binary.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions: {0}x{1} (needs at least two cells)")]
    InvalidDimensions(i32, i32),
    #[error("maze has no path from entry to exit")]
    Unsolvable,
    #[error(transparent)]
    Generation(#[from] GenerationError),
}
