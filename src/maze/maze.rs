use crate::dims::Dims;
use crate::maze::cell::{Cell, CellWall};

/// Rectangular grid of wall masks, stored flat in row-major order so a cell
/// index is `row * width + col`. The generator is the only mutator; the solver
/// and renderer read it.
#[derive(Debug, Clone)]
pub struct Maze {
    pub(crate) cells: Vec<Cell>,
    pub(crate) width: usize,
    pub(crate) height: usize,
}

impl Maze {
    /// Fully walled maze of the given size (`size.0` columns, `size.1` rows).
    pub fn new_walled(size: Dims) -> Self {
        let (width, height) = (size.0 as usize, size.1 as usize);
        Maze {
            cells: vec![Cell::WALLED; width * height],
            width,
            height,
        }
    }

    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Entry cell, fixed at the top-left corner.
    pub fn entry(&self) -> Dims {
        Dims::ZERO
    }

    /// Exit cell, fixed at the bottom-right corner.
    pub fn exit(&self) -> Dims {
        Dims(self.width as i32 - 1, self.height as i32 - 1)
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        0 <= pos.0 && pos.0 < self.width as i32 && 0 <= pos.1 && pos.1 < self.height as i32
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        if !self.is_in_bounds(pos) {
            return None;
        }

        Some(pos.1 as usize * self.width + pos.0 as usize)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.cells.len() {
            return None;
        }

        Some(Dims((idx % self.width) as i32, (idx / self.width) as i32))
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.dim_to_idx(pos).map(|i| &self.cells[i])
    }

    pub fn get_cell_mut(&mut self, pos: Dims) -> Option<&mut Cell> {
        self.dim_to_idx(pos).map(move |i| &mut self.cells[i])
    }

    /// Clears the wall of `pos` toward `wall` and the mirrored wall of the
    /// neighbor behind it, keeping the two masks in sync. Does nothing if
    /// either side is out of bounds.
    pub fn remove_wall(&mut self, pos: Dims, wall: CellWall) {
        let neighbor = pos + wall.to_coord();
        if !self.is_in_bounds(pos) || !self.is_in_bounds(neighbor) {
            return;
        }

        if let Some(cell) = self.get_cell_mut(pos) {
            cell.remove_wall(wall);
        }
        if let Some(cell) = self.get_cell_mut(neighbor) {
            cell.remove_wall(wall.reverse_wall());
        }
    }

    /// Which wall of `from` faces `to`, if the two cells are adjacent.
    pub fn which_wall_between(from: Dims, to: Dims) -> Option<CellWall> {
        match to - from {
            Dims(0, -1) => Some(CellWall::North),
            Dims(0, 1) => Some(CellWall::South),
            Dims(-1, 0) => Some(CellWall::West),
            Dims(1, 0) => Some(CellWall::East),
            _ => None,
        }
    }
}
