use crate::morpion::{BoardState, Coord};

/// A fully materialized game tree rooted at one board.
///
/// Children follow the row-major order of the empty cells they fill.
#[derive(Debug, Clone)]
pub struct GameTree {
    board: BoardState,
    children: Vec<GameTree>,
}

impl GameTree {
    /// Expand every legal continuation of `board` down to `depth` plies.
    /// Terminal boards and exhausted depth give leaves.
    pub fn build(board: BoardState, depth: usize) -> Self {
        let mut node = GameTree {
            board,
            children: Vec::new(),
        };

        if depth == 0 || board.is_terminal() {
            return node;
        }

        let mover = board.turn();
        node.children = board
            .legal_moves()
            .into_iter()
            .filter_map(|c| board.apply_move(mover, c.x(), c.y()).ok())
            .map(|next| GameTree::build(next, depth - 1))
            .collect();

        node
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn children(&self) -> &[GameTree] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(GameTree::node_count).sum::<usize>()
    }

    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(GameTree::leaf_count).sum()
        }
    }

    /// The child reached by playing `c` from this node.
    pub fn child_for(&self, c: Coord) -> Option<&GameTree> {
        self.children
            .iter()
            .find(|child| self.board.diff(&child.board) == Some(c))
    }

    /// Give up this node and keep only the subtree whose board is `board`.
    pub fn into_child(self, board: &BoardState) -> Option<GameTree> {
        self.children.into_iter().find(|child| child.board == *board)
    }
}
