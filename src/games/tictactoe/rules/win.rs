//! Win detection logic for tic-tac-toe.

use super::super::{Action, Board, Player, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The eight winning lines: rows, columns, main diagonal, anti-diagonal.
pub const LINES: [[Action; 3]; 8] = [
    // Rows
    [Action::new(0, 0), Action::new(0, 1), Action::new(0, 2)],
    [Action::new(1, 0), Action::new(1, 1), Action::new(1, 2)],
    [Action::new(2, 0), Action::new(2, 1), Action::new(2, 2)],
    // Columns
    [Action::new(0, 0), Action::new(1, 0), Action::new(2, 0)],
    [Action::new(0, 1), Action::new(1, 1), Action::new(2, 1)],
    [Action::new(0, 2), Action::new(1, 2), Action::new(2, 2)],
    // Diagonals
    [Action::new(0, 0), Action::new(1, 1), Action::new(2, 2)],
    [Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)],
];

/// True if `player` holds every square of some line.
pub fn has_line(board: &Board, player: Player) -> bool {
    let mark = Some(Square::Occupied(player));
    LINES
        .iter()
        .any(|line| line.iter().all(|&cell| board.get(cell) == mark))
}

/// Returns the player with three in a line, if any.
///
/// Assumes at most one player has a completed line, which holds for every
/// board reached by legal play. If both do, X is reported.
#[instrument]
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|&player| has_line(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(winner(&board("XXX/OO./...")), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(winner(&board("XO./XO./.OX")), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(winner(&board("OX./XO./X.O")), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(winner(&board("OOX/.X./XO.")), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winner(&board("XX./O../...")), None);
    }
}
