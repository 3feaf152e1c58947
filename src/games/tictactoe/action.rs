//! Actions (cell coordinates) and move errors for tic-tac-toe.

use super::types::{Player, SIZE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell to mark, addressed by `(row, col)`.
///
/// Construction does not validate the coordinates; [`apply`](super::rules::apply)
/// rejects anything outside `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    row: usize,
    col: usize,
}

const LABELS: [[&str; SIZE]; SIZE] = [
    ["Top-left", "Top-center", "Top-right"],
    ["Middle-left", "Center", "Middle-right"],
    ["Bottom-left", "Bottom-center", "Bottom-right"],
];

impl Action {
    /// Creates an action targeting `(row, col)`.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(&self) -> usize {
        self.col
    }

    /// True when both coordinates are on the board.
    pub fn in_bounds(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// All nine cells in row-major order.
    pub const ALL: [Action; 9] = [
        Action::new(0, 0),
        Action::new(0, 1),
        Action::new(0, 2),
        Action::new(1, 0),
        Action::new(1, 1),
        Action::new(1, 2),
        Action::new(2, 0),
        Action::new(2, 1),
        Action::new(2, 2),
    ];

    /// Human-readable cell name, e.g. `"Center"`.
    pub fn label(&self) -> Option<&'static str> {
        LABELS.get(self.row).and_then(|row| row.get(self.col)).copied()
    }

    /// Cell number 1-9 in row-major order (keypad style used by the CLI).
    pub fn number(&self) -> Option<usize> {
        self.in_bounds().then(|| self.row * SIZE + self.col + 1)
    }

    /// Parses `"row col"`, `"row,col"`, a cell number `1-9`, or a cell name.
    ///
    /// Cell names match case-insensitively on the full label
    /// (`"top-left"`, `"center"`, ...).
    #[instrument]
    pub fn parse_input(input: &str) -> Option<Action> {
        let input = input.trim();
        let parts: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [row, col] => {
                let action = Action::new(row.parse().ok()?, col.parse().ok()?);
                action.in_bounds().then_some(action)
            }
            [single] => {
                if let Ok(number) = single.parse::<usize>() {
                    return (1..=SIZE * SIZE)
                        .contains(&number)
                        .then(|| Action::ALL[number - 1]);
                }
                let wanted = single.to_lowercase();
                Action::ALL.into_iter().find(|action| {
                    action
                        .label()
                        .is_some_and(|label| label.to_lowercase() == wanted)
                })
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error applying an action to a board.
///
/// Always a caller bug: the search only applies actions it drew from
/// [`legal_actions`](super::rules::legal_actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMoveError {
    /// The targeted square already holds a mark.
    #[display("Square {} is already occupied by {}", action, by)]
    Occupied {
        /// The rejected action.
        action: Action,
        /// The mark already on the square.
        by: Player,
    },

    /// The coordinates are outside the 3x3 grid.
    #[display("Square {} is off the board", action)]
    OutOfRange {
        /// The rejected action.
        action: Action,
    },
}

impl IllegalMoveError {
    /// The action that was rejected.
    pub fn action(&self) -> Action {
        match self {
            IllegalMoveError::Occupied { action, .. } | IllegalMoveError::OutOfRange { action } => {
                *action
            }
        }
    }
}

impl std::error::Error for IllegalMoveError {}
