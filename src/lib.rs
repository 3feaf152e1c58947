//! Strictly Minimax library - tic-tac-toe rules and optimal play
//!
//! Boards are immutable values. The rules engine infers the side to move
//! from the marks on the board, and the search plays every line to the end
//! to find an optimal move.
//!
//! # Architecture
//!
//! - **Games**: board model, rules engine, and minimax search
//! - **Players**: human, minimax, and first-free seats
//! - **Orchestrator**: runs a game between two players
//! - **Config**: TOML match configuration
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Action, Board, apply, best_action, winner, TicTacToePlayer};
//!
//! let board: Board = "XX./OO./...".parse()?;
//! let action = best_action(&board).expect("game is not over");
//! assert_eq!(action, Action::new(0, 2));
//!
//! let board = apply(&board, action)?;
//! assert_eq!(winner(&board), Some(TicTacToePlayer::X));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod orchestrator;
mod players;

// Crate-level exports - Match configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, MatchConfig, SeatConfig};

// Crate-level exports - Orchestration
pub use orchestrator::{GameEvent, GameRecord, Orchestrator, PlayedMove};

// Crate-level exports - Players
pub use players::{FirstFreePlayer, HumanPlayer, MinimaxPlayer, Player, PlayerKind};

// Crate-level exports - Game types and engine (tic-tac-toe)
pub use games::tictactoe::{
    Action, Board, BoardParseError, Evaluation, GameResult, IllegalMoveError, SIZE, Square,
    apply, best_action, evaluate, initial_board, is_draw, is_full, is_terminal, legal_actions, outcome,
    player_to_move, utility, winner, Player as TicTacToePlayer,
};
