//! Game result derived from a board.

use super::Player;
use serde::{Deserialize, Serialize};

/// Where a board stands: still being played, or how it ended.
///
/// Never stored; computed by [`outcome`](super::rules::outcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// No winner and at least one empty square.
    InProgress,
    /// X completed a line.
    XWins,
    /// O completed a line.
    OWins,
    /// Full board, no line.
    Draw,
}

impl GameResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::XWins => Some(Player::X),
            GameResult::OWins => Some(Player::O),
            GameResult::InProgress | GameResult::Draw => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

impl From<Player> for GameResult {
    fn from(winner: Player) -> Self {
        match winner {
            Player::X => GameResult::XWins,
            Player::O => GameResult::OWins,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::XWins => write!(f, "Player X wins"),
            GameResult::OWins => write!(f, "Player O wins"),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}
