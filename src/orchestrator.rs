//! Game orchestration between players.

use crate::games::tictactoe::{
    Action, Board, GameResult, Player as Mark, apply, initial_board, outcome, player_to_move,
};
use crate::players::Player;
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Notifications emitted while a game runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A player is about to choose.
    AwaitingMove {
        /// Seat to move.
        mark: Mark,
        /// Player name.
        player: String,
    },
    /// A move was made.
    MoveMade {
        /// Seat that moved.
        mark: Mark,
        /// Player name.
        player: String,
        /// Square marked.
        action: Action,
        /// Board after the move.
        board: Board,
    },
    /// The game ended.
    GameOver {
        /// Final result.
        result: GameResult,
        /// Winner's name, `None` on a draw.
        winner: Option<String>,
    },
}

/// One move of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayedMove {
    /// Seat that moved.
    pub mark: Mark,
    /// Square marked.
    pub action: Action,
}

/// Complete record of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    /// Moves in order.
    pub moves: Vec<PlayedMove>,
    /// Final board.
    pub board: Board,
    /// Final result.
    pub result: GameResult,
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    board: Board,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates an orchestrator starting from the initial board.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            board: initial_board(),
            player_x,
            player_o,
        }
    }

    /// Starts from `board` instead of the initial board.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs the game to completion, reporting each step to `observer`.
    ///
    /// # Errors
    ///
    /// Fails if a player cannot produce a move or returns an illegal one.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self, mut observer: impl FnMut(&GameEvent)) -> Result<GameRecord> {
        info!("Starting game orchestration");
        let mut moves = Vec::new();

        loop {
            let result = outcome(&self.board);
            if result.is_over() {
                let winner = result.winner().map(|mark| self.seat(mark).name().to_string());
                info!(%result, ?winner, "Game over");
                observer(&GameEvent::GameOver { result, winner });
                return Ok(GameRecord {
                    moves,
                    board: self.board,
                    result,
                });
            }

            let mark = player_to_move(&self.board);
            let player_name = self.seat(mark).name().to_string();
            observer(&GameEvent::AwaitingMove {
                mark,
                player: player_name.clone(),
            });

            debug!(player = %player_name, %mark, "Waiting for move");
            let board = self.board;
            let action = self
                .seat_mut(mark)
                .choose(&board)
                .with_context(|| format!("{player_name} failed to move"))?;

            self.board = apply(&self.board, action)
                .with_context(|| format!("{player_name} chose an illegal move"))?;
            moves.push(PlayedMove { mark, action });

            observer(&GameEvent::MoveMade {
                mark,
                player: player_name,
                action,
                board: self.board,
            });
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        self.board = initial_board();
    }

    fn seat(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::X => self.player_x.as_ref(),
            Mark::O => self.player_o.as_ref(),
        }
    }

    fn seat_mut(&mut self, mark: Mark) -> &mut dyn Player {
        match mark {
            Mark::X => self.player_x.as_mut(),
            Mark::O => self.player_o.as_mut(),
        }
    }
}
