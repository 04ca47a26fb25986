use self::CellWall::*;
use crate::dims::Dims;

/// One of the four walls around a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellWall {
    North,
    West,
    South,
    East,
}

impl CellWall {
    /// Bit of this wall inside a cell mask.
    pub fn bit(self) -> u8 {
        match self {
            North => 0b1000,
            West => 0b0100,
            South => 0b0010,
            East => 0b0001,
        }
    }

    /// Offset to the neighbor behind this wall.
    pub fn to_coord(self) -> Dims {
        match self {
            North => Dims(0, -1),
            West => Dims(-1, 0),
            South => Dims(0, 1),
            East => Dims(1, 0),
        }
    }

    /// The same wall as seen from the neighbor's side.
    pub fn reverse_wall(self) -> CellWall {
        match self {
            North => South,
            South => North,
            West => East,
            East => West,
        }
    }

    /// Fixed direction order the solver probes in.
    pub fn get_in_order() -> [CellWall; 4] {
        [North, East, South, West]
    }

    pub fn to_char(self) -> char {
        match self {
            North => 'N',
            East => 'E',
            South => 'S',
            West => 'W',
        }
    }
}

/// Wall mask of a single cell; a set bit means the wall is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell(u8);

impl Cell {
    /// All four walls up.
    pub const WALLED: Cell = Cell(0b1111);
    /// No walls at all, used for the entry and exit cells.
    pub const OPEN: Cell = Cell(0b0000);

    pub fn remove_wall(&mut self, wall: CellWall) {
        self.0 &= !wall.bit();
    }

    pub fn has_wall(self, wall: CellWall) -> bool {
        self.0 & wall.bit() != 0
    }

    pub fn is_open(self, wall: CellWall) -> bool {
        !self.has_wall(wall)
    }

    /// Raw 4-bit mask, NWSE from the high bit down.
    pub fn mask(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, CellWall};

    #[test]
    fn wall_bits_are_independent() {
        let mut cell = Cell::WALLED;

        cell.remove_wall(CellWall::East);
        assert!(cell.is_open(CellWall::East));
        assert!(cell.has_wall(CellWall::North));
        assert!(cell.has_wall(CellWall::West));
        assert!(cell.has_wall(CellWall::South));
        assert_eq!(cell.mask(), 0b1110);

        cell.remove_wall(CellWall::East);
        assert_eq!(cell.mask(), 0b1110);
    }

    #[test]
    fn reverse_walls_mirror() {
        for wall in CellWall::get_in_order() {
            assert_eq!(wall.reverse_wall().reverse_wall(), wall);
            assert_eq!(
                wall.to_coord() + wall.reverse_wall().to_coord(),
                crate::dims::Dims::ZERO
            );
        }
    }
}
