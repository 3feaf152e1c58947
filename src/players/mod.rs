//! Player trait and implementations.

mod first_free;
mod human;
mod minimax;

pub use first_free::FirstFreePlayer;
pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;

use crate::games::tictactoe::{Action, Board};
use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Trait for players that can make moves.
pub trait Player {
    /// Chooses an action for the side to move on `board`.
    ///
    /// The board is never terminal when this is called.
    fn choose(&mut self, board: &Board) -> Result<Action>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Kinds of player that can fill a seat.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerKind {
    /// Reads moves from standard input.
    #[display("human")]
    Human,
    /// Plays the minimax move.
    #[display("minimax")]
    Minimax,
    /// Takes the first empty square.
    #[display("first-free")]
    FirstFree,
}

impl PlayerKind {
    /// Default display name for a seat of this kind.
    pub fn default_name(self) -> &'static str {
        match self {
            PlayerKind::Human => "Human",
            PlayerKind::Minimax => "Minimax",
            PlayerKind::FirstFree => "First-free",
        }
    }
}
