use crate::dims::Dims;
use crate::maze::cell::CellWall;
use crate::maze::Maze;

/// First-path depth-first solver. Directions are probed north, east, south,
/// west, reading the wall bits of the cell the search currently stands on.
pub struct DepthFirstSearch;

/// Path and visited map of one successful solve; both hold exactly the cells
/// of the found path, dead branches have unmarked themselves on backtrack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    path: Vec<usize>,
    visited: Vec<bool>,
    size: Dims,
}

impl Solution {
    /// Cell indices from entry to exit.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn size(&self) -> Dims {
        self.size
    }

    pub fn is_visited(&self, pos: Dims) -> bool {
        let idx = pos.1 as usize * self.size.0 as usize + pos.0 as usize;
        self.visited.get(idx).copied().unwrap_or(false)
    }

    /// Compass rendering of the path, one character from {N,E,S,W} per step.
    pub fn directions(&self) -> String {
        let width = self.size.0;
        self.path
            .windows(2)
            .map(|step| {
                let from = Dims(step[0] as i32 % width, step[0] as i32 / width);
                let to = Dims(step[1] as i32 % width, step[1] as i32 / width);
                // Consecutive path cells are adjacent by construction.
                Maze::which_wall_between(from, to).unwrap().to_char()
            })
            .collect()
    }
}

impl DepthFirstSearch {
    /// Searches from the top-left to the bottom-right cell. `None` means the
    /// exit is unreachable, which never happens for a generated maze.
    pub fn solve(maze: &Maze) -> Option<Solution> {
        let mut visited = vec![false; maze.cell_count()];
        let mut path = Vec::new();

        Self::dfs(maze, maze.entry(), &mut visited, &mut path).then(|| Solution {
            path,
            visited,
            size: maze.size(),
        })
    }

    /// Returns true from the frame that steps onto the exit, before that
    /// frame's own backtrack; every frame off the successful path unmarks
    /// itself and pops from `path` before returning false.
    fn dfs(maze: &Maze, pos: Dims, visited: &mut [bool], path: &mut Vec<usize>) -> bool {
        let Some(idx) = maze.dim_to_idx(pos) else {
            return false;
        };
        if visited[idx] {
            return false;
        }

        visited[idx] = true;
        path.push(idx);

        if pos == maze.exit() {
            return true;
        }

        let cell = maze.cells[idx];
        for wall in CellWall::get_in_order() {
            if cell.is_open(wall) && Self::dfs(maze, pos + wall.to_coord(), visited, path) {
                return true;
            }
        }

        visited[idx] = false;
        path.pop();
        false
    }
}
