use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use thiserror::Error;

mod lines;
pub use lines::{Coord, LINES};

/// A player's mark. `X` always opens the game and is the side the evaluator
/// scores positively.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Not for Mark {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl From<Mark> for char {
    fn from(m: Mark) -> char {
        match m {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cell {x}, {y} is already taken")]
    CellOccupied { x: usize, y: usize },

    #[error("it is {expected}'s turn, not {actor}'s")]
    WrongTurn { expected: Mark, actor: Mark },

    #[error("cell {x}, {y} is off the board")]
    OutOfBounds { x: usize, y: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("expected 9 cells, got {0}")]
    Length(usize),

    #[error("invalid cell character '{0}'")]
    Cell(char),

    #[error("impossible mark counts: X={x}, O={o}")]
    Counts { x: usize, o: usize },
}

/// A 3x3 grid plus the side to move.
///
/// States are plain values: applying a move produces a new state and leaves
/// the original untouched, so every search branch owns its own snapshot.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct BoardState {
    cells: [Option<Mark>; 9],
    turn: Mark,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    pub fn new() -> Self {
        BoardState {
            cells: [None; 9],
            turn: Mark::X,
        }
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// The mark at `c`; `None` for an empty cell or one off the board.
    pub fn get(&self, c: Coord) -> Option<Mark> {
        if !c.in_bounds() {
            return None;
        }
        self.cells[c.idx()]
    }

    pub fn cells(&self) -> &[Option<Mark>; 9] {
        &self.cells
    }

    pub fn apply_move(&self, actor: Mark, x: usize, y: usize) -> Result<BoardState, MoveError> {
        let c = Coord(x, y);
        if !c.in_bounds() {
            return Err(MoveError::OutOfBounds { x, y });
        }

        if actor != self.turn {
            return Err(MoveError::WrongTurn {
                expected: self.turn,
                actor,
            });
        }

        if self.cells[c.idx()].is_some() {
            return Err(MoveError::CellOccupied { x, y });
        }

        let mut res = *self;
        res.cells[c.idx()] = Some(actor);
        res.turn = !actor;
        Ok(res)
    }

    /// The mark holding a complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|line| {
            let (a, b, c) = (self.get(line[0]), self.get(line[1]), self.get(line[2]));
            match a {
                Some(m) if b == a && c == a => Some(m),
                _ => None,
            }
        })
    }

    pub fn is_won(&self) -> bool {
        self.winner().is_some()
    }

    pub fn has_legal_moves(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    pub fn is_terminal(&self) -> bool {
        self.is_won() || !self.has_legal_moves()
    }

    /// Empty cells in row-major order. Move selection breaks ties on this
    /// order, so it must stay stable.
    pub fn legal_moves(&self) -> Vec<Coord> {
        (0..9)
            .filter(|&i| self.cells[i].is_none())
            .map(Coord::from_idx)
            .collect()
    }

    /// First cell (row-major) where the two grids disagree.
    pub fn diff(&self, other: &BoardState) -> Option<Coord> {
        (0..9)
            .find(|&i| self.cells[i] != other.cells[i])
            .map(Coord::from_idx)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Some(mark)).count()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   0   1   2")?;
        for y in 0..3 {
            if y > 0 {
                writeln!(f, "  ---+---+---")?;
            }
            let row: Vec<char> = (0..3)
                .map(|x| self.get(Coord(x, y)).map(char::from).unwrap_or(' '))
                .collect();
            writeln!(f, "{}  {} | {} | {}", y, row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

impl FromStr for BoardState {
    type Err = ParseBoardError;

    // e.g. "XO./.X./..O"; separators and whitespace are ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            let cell = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '_' | '-' => None,
                other => return Err(ParseBoardError::Cell(other)),
            };
            cells.push(cell);
        }

        let cells: [Option<Mark>; 9] = cells
            .try_into()
            .map_err(|v: Vec<_>| ParseBoardError::Length(v.len()))?;

        let mut res = BoardState {
            cells,
            turn: Mark::X,
        };

        let (x, o) = (res.count(Mark::X), res.count(Mark::O));
        res.turn = match x.checked_sub(o) {
            Some(0) => Mark::X,
            Some(1) => Mark::O,
            _ => return Err(ParseBoardError::Counts { x, o }),
        };

        Ok(res)
    }
}
