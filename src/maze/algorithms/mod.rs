mod depth_first_search;
mod rnd_kruskals;

pub use depth_first_search::{DepthFirstSearch, Solution};
pub use rnd_kruskals::RndKruskals;

use thiserror::Error;

use crate::dims::Dims;
use crate::maze::Maze;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid maze size: {0:?}")]
    InvalidSize(Dims),
}

pub trait MazeAlgorithm {
    fn generate(size: Dims, rng: &mut Random) -> Result<Maze, GenerationError> {
        if !size.all_positive() {
            return Err(GenerationError::InvalidSize(size));
        }

        log::debug!("generating {}x{} maze", size.1, size.0);

        Ok(Self::generate_individual(size, rng))
    }

    fn generate_individual(size: Dims, rng: &mut Random) -> Maze;
}
