use crate::dims::Dims;
use crate::maze::algorithms::Solution;
use crate::maze::{CellWall, Maze};

/// ASCII picture of the wall grid, one `+---+` band per row of cells.
/// Horizontal segments come from the north and south bits, vertical ones from
/// the west and east bits, so the pre-opened entry and exit corners show up as
/// gaps in the border.
pub fn render_maze(maze: &Maze) -> String {
    let Dims(width, height) = maze.size();
    let mut out = String::new();

    for y in 0..height {
        for x in 0..width {
            let cell = maze.get_cell(Dims(x, y)).unwrap();
            out.push('+');
            out.push_str(if cell.has_wall(CellWall::North) {
                "---"
            } else {
                "   "
            });
        }
        out.push_str("+\n");

        for x in 0..width {
            let cell = maze.get_cell(Dims(x, y)).unwrap();
            out.push(if cell.has_wall(CellWall::West) { '|' } else { ' ' });
            out.push_str("   ");
        }
        let last = maze.get_cell(Dims(width - 1, y)).unwrap();
        out.push(if last.has_wall(CellWall::East) { '|' } else { ' ' });
        out.push('\n');
    }

    for x in 0..width {
        let cell = maze.get_cell(Dims(x, height - 1)).unwrap();
        out.push('+');
        out.push_str(if cell.has_wall(CellWall::South) {
            "---"
        } else {
            "   "
        });
    }
    out.push_str("+\n");

    out
}

/// `0`/`1` grid of the solved path, matching the solution's visited map.
pub fn render_visited(solution: &Solution) -> String {
    let Dims(width, height) = solution.size();
    let mut out = String::new();

    for y in 0..height {
        for x in 0..width {
            out.push(if solution.is_visited(Dims(x, y)) {
                '1'
            } else {
                '0'
            });
        }
        out.push('\n');
    }

    out
}
