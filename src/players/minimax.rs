//! Player backed by the minimax search.

use super::Player;
use crate::games::tictactoe::{Action, Board, evaluate};
use anyhow::Result;
use tracing::{info, instrument};

/// Always plays an optimal move.
pub struct MinimaxPlayer {
    name: String,
}

impl MinimaxPlayer {
    /// Creates a new minimax player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for MinimaxPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose(&mut self, board: &Board) -> Result<Action> {
        let eval = evaluate(board);
        let Some(action) = eval.action() else {
            anyhow::bail!("No valid moves available");
        };
        info!(%action, value = eval.value(), nodes = eval.nodes(), "Minimax chose square");
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
