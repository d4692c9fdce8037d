use tracing::{debug, trace};

use super::{Player, PlayerError};
use crate::morpion::{BoardState, Coord};
use crate::search::{select_move_with_depth, GameTree, DEPTH_BOUND};

/// Automated player driven by the game-tree search.
///
/// When its tree reaches every end of the game it keeps the subtree under the
/// move it played, and picks it back up on its next turn instead of
/// rebuilding from scratch.
pub struct MinimaxPlayer {
    depth: usize,
    tree: Option<GameTree>,
    built: usize,
}

impl MinimaxPlayer {
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            tree: None,
            built: 0,
        }
    }

    /// Number of trees built from scratch so far.
    pub fn trees_built(&self) -> usize {
        self.built
    }

    fn tree_for(&mut self, board: BoardState) -> GameTree {
        if let Some(tree) = self.tree.take() {
            if *tree.board() == board {
                return tree;
            }

            // the opponent moved since we last played
            if let Some(sub) = tree.into_child(&board) {
                trace!("reusing retained subtree");
                return sub;
            }

            debug!("retained tree does not match the board, rebuilding");
        }

        self.built += 1;
        GameTree::build(board, self.depth)
    }
}

impl Default for MinimaxPlayer {
    fn default() -> Self {
        Self::new(DEPTH_BOUND)
    }
}

impl Player for MinimaxPlayer {
    fn make_move(&mut self, board: BoardState) -> Result<Coord, PlayerError> {
        let tree = self.tree_for(board);
        let mov = select_move_with_depth(&board, &tree, self.depth)?;

        if self.depth >= board.legal_moves().len() {
            let played = tree.child_for(mov).map(|c| *c.board());
            self.tree = played.and_then(|b| tree.into_child(&b));
        }

        Ok(mov)
    }

    fn ident(&self) -> &'static str {
        "minimax"
    }
}
