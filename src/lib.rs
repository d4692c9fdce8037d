pub mod config;
pub mod morpion;
pub mod player;
pub mod search;
pub mod tourny;

pub use morpion::{BoardState, Coord, Mark, MoveError};
pub use search::{recommend_move, SearchError};

pub fn is_won(board: &BoardState) -> bool {
    board.is_won()
}

pub fn has_legal_moves(board: &BoardState) -> bool {
    board.has_legal_moves()
}
