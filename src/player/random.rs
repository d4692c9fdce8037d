use super::{Player, PlayerError};
use crate::morpion::{BoardState, Coord};

/// Cheap, reproducible stand-in for a random mover.
pub struct RandomPlayer {
    seed: u64,
    moves: u64,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self { seed, moves: 0 }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new(9087901)
    }
}

impl Player for RandomPlayer {
    fn make_move(&mut self, board: BoardState) -> Result<Coord, PlayerError> {
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Err(PlayerError::NoMoves);
        }

        let i = self.seed.wrapping_mul(2654435761).wrapping_add(self.moves * 7);
        self.moves += 1;
        Ok(moves[(i % moves.len() as u64) as usize])
    }

    fn ident(&self) -> &'static str {
        "random"
    }
}
