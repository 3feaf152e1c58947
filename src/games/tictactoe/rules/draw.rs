//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.rows().iter().flatten().all(|s| *s != Square::Empty)
}

/// A full board with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
