//! Exhaustive minimax search for tic-tac-toe.
//!
//! X maximizes utility and O minimizes it. Both sides are searched to the
//! end of the game; the tree is small enough that no pruning is needed.
//! A running best is only replaced on strict improvement, so among equally
//! good actions the first in [`legal_actions`] order wins.

use super::rules::{apply, is_terminal, legal_actions, player_to_move, utility};
use super::{Action, Board, Player};
use tracing::{debug, instrument};

/// Result of searching a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    value: i8,
    action: Option<Action>,
    nodes: u64,
}

impl Evaluation {
    /// Guaranteed utility under optimal play by both sides.
    pub fn value(&self) -> i8 {
        self.value
    }

    /// The chosen action, `None` on a terminal board.
    pub fn action(&self) -> Option<Action> {
        self.action
    }

    /// Number of positions visited.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// Counts positions while the two roles recurse into each other.
#[derive(Debug, Default)]
struct Minimax {
    nodes: u64,
}

impl Minimax {
    fn value_as_maximizer(&mut self, board: &Board) -> (i8, Option<Action>) {
        self.nodes += 1;
        if is_terminal(board) {
            return (utility(board), None);
        }

        let mut best = (i8::MIN, None);
        for action in legal_actions(board) {
            let Ok(child) = apply(board, action) else {
                continue;
            };
            let (value, _) = self.value_as_minimizer(&child);
            if value > best.0 {
                best = (value, Some(action));
            }
        }
        best
    }

    fn value_as_minimizer(&mut self, board: &Board) -> (i8, Option<Action>) {
        self.nodes += 1;
        if is_terminal(board) {
            return (utility(board), None);
        }

        let mut best = (i8::MAX, None);
        for action in legal_actions(board) {
            let Ok(child) = apply(board, action) else {
                continue;
            };
            let (value, _) = self.value_as_maximizer(&child);
            if value < best.0 {
                best = (value, Some(action));
            }
        }
        best
    }
}

/// Searches the position for the side to move.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn evaluate(board: &Board) -> Evaluation {
    let mut search = Minimax::default();
    let to_move = player_to_move(board);
    let (value, action) = match to_move {
        Player::X => search.value_as_maximizer(board),
        Player::O => search.value_as_minimizer(board),
    };

    debug!(
        %to_move,
        value,
        action = ?action,
        nodes = search.nodes,
        "Search complete"
    );

    Evaluation {
        value,
        action,
        nodes: search.nodes,
    }
}

/// Returns the optimal action for the side to move, or `None` if the game is over.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn best_action(board: &Board) -> Option<Action> {
    if is_terminal(board) {
        return None;
    }
    evaluate(board).action()
}
