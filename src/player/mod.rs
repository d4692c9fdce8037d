use std::io;

use thiserror::Error;

use crate::morpion::{BoardState, Coord};
use crate::search::SearchError;

pub mod human;
pub mod minimax;
pub mod random;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;
pub use random::RandomPlayer;

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("no empty cell left to play")]
    NoMoves,

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
}

pub trait Player {
    /// Choose a cell for the side to move on `board`.
    fn make_move(&mut self, board: BoardState) -> Result<Coord, PlayerError>;

    fn ident(&self) -> &'static str;
}
