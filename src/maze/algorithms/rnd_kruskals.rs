use rand::{seq::SliceRandom, Rng};

use super::{MazeAlgorithm, Random};
use crate::dims::Dims;
use crate::dset::DisjointSet;
use crate::maze::cell::{Cell, CellWall};
use crate::maze::Maze;

/// Randomized Kruskal's over the grid graph: pick a random pivot cell, shuffle
/// its four walls and knock down every one that joins two components that were
/// still separate, until the whole grid is one component. The removed walls
/// form a spanning tree, so any two cells are connected by exactly one simple
/// path (the pre-opened entry and exit corners aside).
pub struct RndKruskals;

impl MazeAlgorithm for RndKruskals {
    fn generate_individual(size: Dims, rng: &mut Random) -> Maze {
        let mut maze = Maze::new_walled(size);
        let cell_count = maze.cell_count();

        // Entry and exit start with all four walls down. This is not mirrored
        // onto their neighbors; only the generator proper keeps wall pairs in
        // sync.
        *maze.get_cell_mut(maze.entry()).unwrap() = Cell::OPEN;
        *maze.get_cell_mut(maze.exit()).unwrap() = Cell::OPEN;

        let mut sets = DisjointSet::new(cell_count);
        let mut walls = CellWall::get_in_order();

        while sets.count() > 1 {
            // The entry cell is never picked as a pivot, though a pivot next
            // to it can still connect it.
            let pivot = rng.gen_range(1..cell_count);
            let pivot_pos = maze.idx_to_dim(pivot).unwrap();

            walls.shuffle(rng);
            // All four directions are tried every time, so one pivot can join
            // several components at once.
            for wall in walls {
                let next_pos = pivot_pos + wall.to_coord();
                let Some(next) = maze.dim_to_idx(next_pos) else {
                    continue;
                };

                if sets.find(pivot) != sets.find(next) {
                    maze.remove_wall(pivot_pos, wall);
                    sets.union(pivot, next);
                }
            }
        }

        maze
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::maze::algorithms::GenerationError;

    fn generate(size: Dims, seed: u64) -> Maze {
        let mut rng = Random::seed_from_u64(seed);
        RndKruskals::generate(size, &mut rng).unwrap()
    }

    fn reachable_count(maze: &Maze, start: Dims) -> usize {
        let mut seen = vec![false; maze.cell_count()];
        let mut stack = vec![start];

        while let Some(pos) = stack.pop() {
            let idx = maze.dim_to_idx(pos).unwrap();
            if seen[idx] {
                continue;
            }
            seen[idx] = true;

            for wall in CellWall::get_in_order() {
                let next = pos + wall.to_coord();
                if maze.get_cell(pos).unwrap().is_open(wall) && maze.is_in_bounds(next) {
                    stack.push(next);
                }
            }
        }

        seen.into_iter().filter(|&s| s).count()
    }

    #[test]
    fn generated_maze_is_fully_connected() {
        for (size, seed) in [
            (Dims(2, 2), 1),
            (Dims(4, 5), 2),
            (Dims(10, 10), 3),
            (Dims(7, 1), 4),
            (Dims(1, 7), 5),
        ] {
            let maze = generate(size, seed);
            assert_eq!(
                reachable_count(&maze, maze.entry()),
                maze.cell_count(),
                "entry flood should cover a {:?} maze",
                size
            );
            let inner = Dims(size.0 / 2, size.1 / 2);
            assert_eq!(reachable_count(&maze, inner), maze.cell_count());
        }
    }

    #[test]
    fn walls_stay_symmetric_between_inner_cells() {
        let maze = generate(Dims(8, 6), 11);
        let (entry, exit) = (maze.entry(), maze.exit());

        for idx in 0..maze.cell_count() {
            let pos = maze.idx_to_dim(idx).unwrap();
            for wall in [CellWall::East, CellWall::South] {
                let next = pos + wall.to_coord();
                if !maze.is_in_bounds(next) {
                    continue;
                }
                if [pos, next].contains(&entry) || [pos, next].contains(&exit) {
                    // The pre-opened corners are the documented exception.
                    continue;
                }

                assert_eq!(
                    maze.get_cell(pos).unwrap().is_open(wall),
                    maze.get_cell(next).unwrap().is_open(wall.reverse_wall()),
                    "wall between {:?} and {:?} out of sync",
                    pos,
                    next
                );
            }
        }
    }

    #[test]
    fn same_seed_gives_same_maze() {
        let first = generate(Dims(9, 7), 42);
        let second = generate(Dims(9, 7), 42);
        assert_eq!(first.cells, second.cells);
    }

    #[test]
    fn entry_and_exit_start_open() {
        let maze = generate(Dims(5, 5), 8);
        assert_eq!(maze.get_cell(maze.entry()).unwrap().mask(), 0);
        assert_eq!(maze.get_cell(maze.exit()).unwrap().mask(), 0);
    }

    #[test]
    fn non_positive_size_is_rejected() {
        let mut rng = Random::seed_from_u64(0);
        assert!(matches!(
            RndKruskals::generate(Dims(0, 5), &mut rng),
            Err(GenerationError::InvalidSize(_))
        ));
        assert!(matches!(
            RndKruskals::generate(Dims(3, -1), &mut rng),
            Err(GenerationError::InvalidSize(_))
        ));
    }
}
