//! Baseline player that takes the first empty square.

use super::Player;
use crate::games::tictactoe::{Action, Board, legal_actions};
use anyhow::Result;
use tracing::debug;

/// Picks the first available square in row-major order.
pub struct FirstFreePlayer {
    name: String,
}

impl FirstFreePlayer {
    /// Creates a new first-free player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for FirstFreePlayer {
    fn choose(&mut self, board: &Board) -> Result<Action> {
        let Some(action) = legal_actions(board).first().copied() else {
            anyhow::bail!("No valid moves available");
        };
        debug!(player = %self.name, %action, "First-free chose square");
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
