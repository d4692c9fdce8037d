use std::io::{BufRead, Write};

use tracing::warn;

use super::{Player, PlayerError};
use crate::morpion::{BoardState, Coord};

/// A person at a console, typing `x y` coordinates.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_coord(&mut self, board: &BoardState) -> Result<Coord, PlayerError> {
        loop {
            write!(
                self.output,
                "Player {}, enter the coordinates of your move (x y): ",
                board.turn()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PlayerError::InputClosed);
            }

            let c = match parse_coord(&line) {
                Some(c) => c,
                None => {
                    writeln!(self.output, "Expected two numbers between 0 and 2.")?;
                    continue;
                }
            };

            // reject here so the prompt repeats instead of ending the game
            match board.apply_move(board.turn(), c.x(), c.y()) {
                Ok(_) => return Ok(c),
                Err(e) => {
                    warn!(%c, error = %e, "rejected move");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }
}

fn parse_coord(line: &str) -> Option<Coord> {
    let mut parts = line
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse::<usize>);

    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(x)), Some(Ok(y)), None) => Some(Coord(x, y)),
        _ => None,
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn make_move(&mut self, board: BoardState) -> Result<Coord, PlayerError> {
        self.read_coord(&board)
    }

    fn ident(&self) -> &'static str {
        "human"
    }
}
