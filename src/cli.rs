//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::PlayerKind;

/// Strictly Minimax - tic-tac-toe with perfect play
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe rules engine with exhaustive minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the side to move
    Best {
        /// Board in row-major notation, e.g. "XX./OO./..."
        board: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Describe a board: turn, legal moves, winner, and minimax value
    Analyze {
        /// Board in row-major notation, e.g. "XX./OO./..."
        board: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play a game between two seats
    Play {
        /// Match configuration file (TOML). Read if present.
        #[arg(short, long, default_value = strictly_minimax::DEFAULT_CONFIG_FILE)]
        config: std::path::PathBuf,

        /// Who plays X (overrides the config file)
        #[arg(long, value_enum)]
        x: Option<PlayerKind>,

        /// Who plays O (overrides the config file)
        #[arg(long, value_enum)]
        o: Option<PlayerKind>,
    },

    /// Let minimax play both sides from the initial board
    SelfPlay {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
