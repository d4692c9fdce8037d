use thiserror::Error;
use tracing::{debug, trace};

use crate::morpion::{BoardState, Coord};

pub mod eval;
pub mod tree;

pub use eval::{evaluate, Score};
pub use tree::GameTree;

/// Plies the tree is built to; more than enough to reach every end of a 3x3 game.
pub const DEPTH_BOUND: usize = 10;

/// Lookahead used when scoring each candidate move.
pub const LOOKAHEAD: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no child of the search tree differs from the current board")]
    NoDifferingChildFound,
}

/// Plain depth-bounded minimax over an already built tree.
///
/// Nodes without children that are not won (a full board, or a node cut off
/// by the tree's own depth) are worth 0 rather than an infinite sentinel.
pub fn minimax(node: &GameTree, depth: usize, maximizing: bool) -> Score {
    if depth == 0 || node.board().is_won() {
        return evaluate(node.board());
    }

    let values = node
        .children()
        .iter()
        .map(|child| minimax(child, depth - 1, !maximizing));

    let best = if maximizing {
        values.max()
    } else {
        values.min()
    };

    best.unwrap_or(0)
}

pub fn select_move(current: &BoardState, node: &GameTree) -> Result<Coord, SearchError> {
    select_move_with_depth(current, node, LOOKAHEAD)
}

/// Pick the child of `node` with the lowest score, scoring each child with
/// X to move next, and report the cell it fills.
///
/// Ties keep the earliest child in row-major order.
pub fn select_move_with_depth(
    current: &BoardState,
    node: &GameTree,
    lookahead: usize,
) -> Result<Coord, SearchError> {
    let mut best: Option<(Score, &GameTree)> = None;

    for child in node.children() {
        let score = minimax(child, lookahead, true);
        trace!(mov = ?current.diff(child.board()), score, "scored candidate");

        if best.map_or(true, |(s, _)| score < s) {
            best = Some((score, child));
        }
    }

    let (score, child) = best.ok_or(SearchError::NoDifferingChildFound)?;
    let mov = current
        .diff(child.board())
        .ok_or(SearchError::NoDifferingChildFound)?;

    debug!(%mov, score, "selected move");
    Ok(mov)
}

pub fn recommend_move(board: BoardState) -> Result<Coord, SearchError> {
    recommend_move_with_depth(board, DEPTH_BOUND)
}

/// Build a fresh tree from `board` and run move selection over it.
pub fn recommend_move_with_depth(board: BoardState, depth: usize) -> Result<Coord, SearchError> {
    let tree = GameTree::build(board, depth);
    debug!(
        nodes = tree.node_count(),
        leaves = tree.leaf_count(),
        depth,
        "built game tree"
    );

    select_move_with_depth(&board, &tree, depth)
}
