use morpion::search::GameTree;
use morpion::{has_legal_moves, is_won, recommend_move, BoardState, Coord, Mark, MoveError};

fn play(board: BoardState, actor: Mark, x: usize, y: usize) -> BoardState {
    board.apply_move(actor, x, y).unwrap()
}

#[test]
fn opening_without_a_line() {
    let b = BoardState::new();
    let b = play(b, Mark::X, 1, 1);
    let b = play(b, Mark::O, 0, 0);
    let b = play(b, Mark::X, 2, 2);

    assert!(!is_won(&b));
    assert!(has_legal_moves(&b));
    assert_eq!(b.turn(), Mark::O);
}

#[test]
fn column_win_lands_on_the_third_mark() {
    let mut b = BoardState::new();
    let moves = [
        (Mark::X, 0, 0),
        (Mark::O, 1, 0),
        (Mark::X, 0, 1),
        (Mark::O, 1, 1),
    ];
    for (actor, x, y) in moves {
        b = play(b, actor, x, y);
        assert!(!is_won(&b));
    }

    let b = play(b, Mark::X, 0, 2);
    assert!(is_won(&b));
    assert_eq!(b.winner(), Some(Mark::X));
}

#[test]
fn rejected_moves_leave_the_turn_loop_in_charge() {
    let b = play(BoardState::new(), Mark::X, 1, 1);

    assert_eq!(
        b.apply_move(Mark::O, 1, 1),
        Err(MoveError::CellOccupied { x: 1, y: 1 })
    );
    assert!(matches!(
        b.apply_move(Mark::X, 0, 0),
        Err(MoveError::WrongTurn { .. })
    ));

    // the board itself is unchanged and still playable
    assert_eq!(play(b, Mark::O, 0, 0).get(Coord(0, 0)), Some(Mark::O));
}

#[test]
fn computer_answers_every_human_move() {
    // the console game: X moves by hand, O by search
    let human = [Coord(1, 1), Coord(0, 0), Coord(2, 0), Coord(0, 1), Coord(2, 2)];
    let mut b = BoardState::new();

    for c in human {
        if b.is_terminal() {
            break;
        }
        if b.get(c).is_some() {
            continue;
        }
        b = play(b, Mark::X, c.x(), c.y());
        if b.is_terminal() {
            break;
        }

        let reply = recommend_move(b).unwrap();
        assert_eq!(b.get(reply), None);
        b = play(b, Mark::O, reply.x(), reply.y());
    }
}

#[test]
fn tree_children_mirror_legal_moves() {
    let b: BoardState = "XO./.X./...".parse().unwrap();
    let t = GameTree::build(b, 10);

    assert_eq!(t.children().len(), b.legal_moves().len());
    for (child, c) in t.children().iter().zip(b.legal_moves()) {
        assert_eq!(child.board().get(c), Some(b.turn()));
        assert_eq!(b.diff(child.board()), Some(c));
    }
}
