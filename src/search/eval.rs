use crate::morpion::{BoardState, Mark, LINES};

pub type Score = i32;

pub const THREE_X: Score = 100;
pub const TWO_X: Score = 10;
pub const THREE_O: Score = -100;
// blocking weighs more than building, so the search favors defense
pub const TWO_O: Score = -50;

/// Static value of a board, positive favoring X. Independent of search depth.
pub fn evaluate(board: &BoardState) -> Score {
    LINES
        .iter()
        .map(|line| {
            let (mut x, mut o, mut empty) = (0, 0, 0);
            for &c in line {
                match board.get(c) {
                    Some(Mark::X) => x += 1,
                    Some(Mark::O) => o += 1,
                    None => empty += 1,
                }
            }

            match (x, o, empty) {
                (3, _, _) => THREE_X,
                (2, _, 1) => TWO_X,
                (_, 3, _) => THREE_O,
                (_, 2, 1) => TWO_O,
                _ => 0,
            }
        })
        .sum()
}
