//! Property tests over boards reached by legal play.

use morpion::search::eval::{evaluate, TWO_O, TWO_X};
use morpion::search::GameTree;
use morpion::{recommend_move, BoardState, Coord, Mark, MoveError};
use proptest::prelude::*;

/// A board reached by playing the given picks, each taken modulo the number
/// of legal moves, stopping early if the game ends.
fn arb_board(max_moves: usize) -> impl Strategy<Value = BoardState> {
    prop::collection::vec(0usize..9, 0..=max_moves).prop_map(|picks| {
        let mut board = BoardState::new();
        for p in picks {
            if board.is_terminal() {
                break;
            }
            let moves = board.legal_moves();
            let c = moves[p % moves.len()];
            board = board.apply_move(board.turn(), c.x(), c.y()).unwrap();
        }
        board
    })
}

fn swap_marks(board: &BoardState) -> Option<BoardState> {
    let s: String = board
        .cells()
        .iter()
        .map(|c| match c {
            Some(Mark::X) => 'O',
            Some(Mark::O) => 'X',
            None => '.',
        })
        .collect();
    s.parse().ok()
}

proptest! {
    #[test]
    fn apply_move_fills_empty_cells(board in arb_board(8), x in 0usize..3, y in 0usize..3) {
        let actor = board.turn();
        match board.get(Coord(x, y)) {
            None => {
                let next = board.apply_move(actor, x, y).unwrap();
                prop_assert_eq!(next.get(Coord(x, y)), Some(actor));
                prop_assert_eq!(next.turn(), !actor);
                prop_assert_eq!(next.legal_moves().len(), board.legal_moves().len() - 1);
            }
            Some(_) => {
                prop_assert_eq!(
                    board.apply_move(actor, x, y),
                    Err(MoveError::CellOccupied { x, y })
                );
            }
        }
    }

    #[test]
    fn mark_counts_stay_balanced(board in arb_board(9)) {
        let diff = board.count(Mark::X) - board.count(Mark::O);
        prop_assert!(diff == 0 || diff == 1);
        prop_assert_eq!(board.turn() == Mark::X, diff == 0);
    }

    #[test]
    fn round_trips_through_text(board in arb_board(9)) {
        let s: String = board
            .cells()
            .iter()
            .map(|c| c.map(char::from).unwrap_or('.'))
            .collect();
        prop_assert_eq!(s.parse::<BoardState>(), Ok(board));
    }

    #[test]
    fn swapping_marks_negates_up_to_the_pair_weights(board in arb_board(8)) {
        // only boards where swapping keeps the counts legal
        if let Some(swapped) = swap_marks(&board) {
            let pairs = |b: &BoardState, m: Mark| {
                morpion::morpion::LINES
                    .iter()
                    .filter(|l| {
                        let n = l.iter().filter(|&&c| b.get(c) == Some(m)).count();
                        let e = l.iter().filter(|&&c| b.get(c).is_none()).count();
                        n == 2 && e == 1
                    })
                    .count() as i32
            };

            let x_pairs = pairs(&board, Mark::X);
            let o_pairs = pairs(&board, Mark::O);
            let asymmetry = (TWO_X + TWO_O) * (x_pairs + o_pairs);
            prop_assert_eq!(evaluate(&board) + evaluate(&swapped), asymmetry);
        }
    }

    #[test]
    fn zero_depth_tree_is_a_leaf(board in arb_board(9)) {
        prop_assert!(GameTree::build(board, 0).is_leaf());
    }

    #[test]
    fn shallow_tree_matches_legal_moves(board in arb_board(9)) {
        let t = GameTree::build(board, 1);
        if board.is_terminal() {
            prop_assert!(t.is_leaf());
        } else {
            prop_assert_eq!(t.children().len(), board.legal_moves().len());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn recommendation_is_an_empty_cell(board in arb_board(8)) {
        prop_assume!(!board.is_terminal());
        let c = recommend_move(board).unwrap();
        prop_assert!(c.in_bounds());
        prop_assert_eq!(board.get(c), None);
    }
}
