//! Tic-tac-toe: board model, rules engine, and minimax search.

mod action;
mod phases;
pub mod rules;
mod search;
mod types;

pub use action::{Action, IllegalMoveError};
pub use phases::GameResult;
pub use rules::{
    apply, initial_board, is_draw, is_full, is_terminal, legal_actions, outcome, player_to_move, utility,
    winner,
};
pub use search::{Evaluation, best_action, evaluate};
pub use types::{Board, BoardParseError, Player, SIZE, Square};
