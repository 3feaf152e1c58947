//! Tests for the tic-tac-toe rules engine.

use std::collections::HashSet;

use strictly_minimax::TicTacToePlayer as Player;
use strictly_minimax::{
    Action, Board, GameResult, IllegalMoveError, Square, apply, initial_board, is_terminal,
    legal_actions, outcome, player_to_move, utility, winner,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board notation")
}

/// Every board reachable from the initial board by legal play.
fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_board()];
    let mut boards = Vec::new();

    while let Some(b) = stack.pop() {
        if !seen.insert(b) {
            continue;
        }
        boards.push(b);
        if is_terminal(&b) {
            continue;
        }
        for action in legal_actions(&b) {
            stack.push(apply(&b, action).expect("legal action applies"));
        }
    }
    boards
}

#[test]
fn test_initial_board_is_empty_and_x_moves() {
    let b = initial_board();
    assert_eq!(b, Board::new());
    assert_eq!(b.marked(), 0);
    assert_eq!(player_to_move(&b), Player::X);
    assert_eq!(legal_actions(&b).len(), 9);
    assert!(!is_terminal(&b));
}

#[test]
fn test_single_move_hands_turn_to_o() {
    for action in Action::ALL {
        let b = apply(&initial_board(), action).unwrap();
        assert_eq!(player_to_move(&b), Player::O);
    }
}

#[test]
fn test_reachable_board_count() {
    // Well-known count of legal tic-tac-toe positions, including the empty board.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_reachable_boards_properties() {
    for b in reachable_boards() {
        assert!(b.has_reachable_counts(), "{}", b.notation());

        let actions = legal_actions(&b);
        assert_eq!(actions.len(), 9 - b.marked(), "{}", b.notation());

        assert_eq!(
            is_terminal(&b),
            winner(&b).is_some() || actions.is_empty(),
            "{}",
            b.notation()
        );

        let mover = player_to_move(&b);
        for action in actions {
            let next = apply(&b, action).unwrap();
            assert_eq!(next.get(action), Some(Square::Occupied(mover)));
            assert_eq!(next.marked(), b.marked() + 1);
            assert_eq!(player_to_move(&next), mover.opponent());
        }
    }
}

#[test]
fn test_apply_is_value_semantic() {
    let original = board("X../.O./...");
    let copy = original;
    let next = apply(&original, Action::new(2, 2)).unwrap();
    assert_eq!(original, copy);
    assert_ne!(next, original);
    assert_eq!(next.get(Action::new(2, 2)), Some(Square::Occupied(Player::X)));
}

#[test]
fn test_apply_occupied_fails() {
    let b = board("X../.O./...");
    let err = apply(&b, Action::new(1, 1)).unwrap_err();
    assert_eq!(
        err,
        IllegalMoveError::Occupied {
            action: Action::new(1, 1),
            by: Player::O
        }
    );
    assert!(err.to_string().contains("occupied"));
}

#[test]
fn test_apply_out_of_range_fails() {
    let err = apply(&initial_board(), Action::new(5, 1)).unwrap_err();
    assert_eq!(err.action(), Action::new(5, 1));
    assert!(matches!(err, IllegalMoveError::OutOfRange { .. }));
}

#[test]
fn test_utility_every_line() {
    let x_lines = [
        "XXX/OO./...",
        "OO./XXX/...",
        "OO./.../XXX",
        "XO./XO./X..",
        "OX./OX./.X.",
        "O.X/O.X/..X",
        "XO./OX./..X",
        "O.X/OX./X..",
    ];
    for s in x_lines {
        assert_eq!(winner(&board(s)), Some(Player::X), "{s}");
        assert_eq!(utility(&board(s)), 1, "{s}");
        assert_eq!(outcome(&board(s)), GameResult::XWins, "{s}");
    }

    let o_lines = ["OOO/XX./X..", "XXO/XO./O..", "OXX/XO./..O"];
    for s in o_lines {
        assert_eq!(winner(&board(s)), Some(Player::O), "{s}");
        assert_eq!(utility(&board(s)), -1, "{s}");
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let b = board("XOX/XOO/OXX");
    assert!(is_terminal(&b));
    assert_eq!(winner(&b), None);
    assert_eq!(utility(&b), 0);
    assert_eq!(outcome(&b), GameResult::Draw);
    assert!(legal_actions(&b).is_empty());
}

#[test]
fn test_equal_counts_off_start_still_x() {
    let b = board("XO./.../...");
    assert_eq!(player_to_move(&b), Player::X);
}
