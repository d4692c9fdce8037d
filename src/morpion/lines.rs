use std::fmt;

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Coord(pub usize, pub usize);

impl Coord {
    pub fn x(&self) -> usize {
        self.0
    }

    pub fn y(&self) -> usize {
        self.1
    }

    pub fn in_bounds(&self) -> bool {
        self.0 < 3 && self.1 < 3
    }

    // row-major index into the flat grid
    pub(crate) fn idx(&self) -> usize {
        self.1 * 3 + self.0
    }

    pub(crate) fn from_idx(i: usize) -> Self {
        Coord(i % 3, i / 3)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// The 8 winning lines of the grid: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Coord; 3]; 8] = [
    [Coord(0, 0), Coord(1, 0), Coord(2, 0)],
    [Coord(0, 1), Coord(1, 1), Coord(2, 1)],
    [Coord(0, 2), Coord(1, 2), Coord(2, 2)],
    [Coord(0, 0), Coord(0, 1), Coord(0, 2)],
    [Coord(1, 0), Coord(1, 1), Coord(1, 2)],
    [Coord(2, 0), Coord(2, 1), Coord(2, 2)],
    [Coord(0, 0), Coord(1, 1), Coord(2, 2)],
    [Coord(2, 0), Coord(1, 1), Coord(0, 2)],
];
