//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`] values. Nothing here mutates a board;
//! [`apply`] returns a fresh one. Turn order is inferred from the marks
//! on the board, so every function assumes the board was reached by
//! alternating play from [`initial_board`].

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, winner};

use super::{Action, Board, GameResult, IllegalMoveError, Player, Square};
use tracing::{debug, instrument};

/// Returns the starting board: nine empty squares.
pub const fn initial_board() -> Board {
    Board::new()
}

/// Returns the player whose turn it is.
///
/// X moves on the initial board and whenever the counts are level;
/// O moves when X has one more mark.
#[instrument]
pub fn player_to_move(board: &Board) -> Player {
    if *board == initial_board() {
        return Player::X;
    }

    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Returns every empty square, in row-major order.
///
/// The order is fixed so that search tie-breaks are reproducible.
pub fn legal_actions(board: &Board) -> Vec<Action> {
    Action::ALL
        .into_iter()
        .filter(|&action| board.is_empty(action))
        .collect()
}

/// Returns the board produced by the side to move marking `action`.
///
/// The input board is left as it was.
///
/// # Errors
///
/// [`IllegalMoveError::OutOfRange`] for coordinates off the grid,
/// [`IllegalMoveError::Occupied`] for a square that already holds a mark.
#[instrument(level = "trace")]
pub fn apply(board: &Board, action: Action) -> Result<Board, IllegalMoveError> {
    match board.get(action) {
        None => Err(IllegalMoveError::OutOfRange { action }),
        Some(Square::Occupied(by)) => Err(IllegalMoveError::Occupied { action, by }),
        Some(Square::Empty) => {
            let mover = player_to_move(board);
            Ok(board.with_square(action, Square::Occupied(mover)))
        }
    }
}

/// True once someone has won or the board is full.
#[instrument(level = "trace")]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Final score of a terminal board: +1 X wins, -1 O wins, 0 draw.
///
/// Meant for terminal boards only; a board still in play scores 0.
#[instrument(level = "trace")]
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Classifies the board.
#[instrument]
pub fn outcome(board: &Board) -> GameResult {
    let result = match winner(board) {
        Some(player) => GameResult::from(player),
        None if is_full(board) => GameResult::Draw,
        None => GameResult::InProgress,
    };
    debug!(%result, "Classified board");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_alternates() {
        let board = initial_board();
        assert_eq!(player_to_move(&board), Player::X);
        let board = apply(&board, Action::new(1, 1)).unwrap();
        assert_eq!(player_to_move(&board), Player::O);
        let board = apply(&board, Action::new(0, 0)).unwrap();
        assert_eq!(player_to_move(&board), Player::X);
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let before = initial_board();
        let after = apply(&before, Action::new(0, 2)).unwrap();
        assert_eq!(before, initial_board());
        assert_eq!(after.get(Action::new(0, 2)), Some(Square::Occupied(Player::X)));
        assert_eq!(after.marked(), 1);
    }

    #[test]
    fn test_apply_rejects_occupied_and_off_board() {
        let board = apply(&initial_board(), Action::new(1, 1)).unwrap();
        assert_eq!(
            apply(&board, Action::new(1, 1)),
            Err(IllegalMoveError::Occupied {
                action: Action::new(1, 1),
                by: Player::X
            })
        );
        assert_eq!(
            apply(&board, Action::new(0, 3)),
            Err(IllegalMoveError::OutOfRange {
                action: Action::new(0, 3)
            })
        );
    }

    #[test]
    fn test_legal_actions_row_major() {
        let board: Board = "X.O/.X./...".parse().unwrap();
        let actions = legal_actions(&board);
        assert_eq!(actions.len(), 6);
        assert_eq!(actions[0], Action::new(0, 1));
        assert!(actions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_utility_and_outcome() {
        let x_wins: Board = "XXX/OO./...".parse().unwrap();
        let o_wins: Board = "XXO/XO./O..".parse().unwrap();
        let draw: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(utility(&x_wins), 1);
        assert_eq!(utility(&o_wins), -1);
        assert_eq!(utility(&draw), 0);
        assert_eq!(outcome(&x_wins), GameResult::XWins);
        assert_eq!(outcome(&o_wins), GameResult::OWins);
        assert_eq!(outcome(&draw), GameResult::Draw);
        assert_eq!(outcome(&initial_board()), GameResult::InProgress);
    }
}
