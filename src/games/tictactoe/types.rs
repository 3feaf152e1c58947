//! Core domain types for tic-tac-toe.

use super::action::Action;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character used for this square in board notation.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// Immutable 3x3 tic-tac-toe board.
///
/// Boards are plain values: moves produce a new board through
/// [`apply`](super::rules::apply) and never touch the original.
///
/// Only boards reached by alternating play from [`Board::new`] are
/// meaningful to the rules engine, which infers the side to move from the
/// mark counts. Use [`Board::has_reachable_counts`] to screen boards that
/// were written by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares indexed by `[row][col]`.
    cells: [[Square; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub const fn new() -> Self {
        Self {
            cells: [[Square::Empty; SIZE]; SIZE],
        }
    }

    /// Creates a board from rows of squares.
    pub const fn from_rows(cells: [[Square; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the square targeted by an action, or `None` if it is off the board.
    pub fn get(&self, action: Action) -> Option<Square> {
        self.cells
            .get(action.row())
            .and_then(|row| row.get(action.col()))
            .copied()
    }

    /// Checks if the square targeted by an action exists and is empty.
    pub fn is_empty(&self, action: Action) -> bool {
        matches!(self.get(action), Some(Square::Empty))
    }

    /// Returns the squares as rows.
    pub fn rows(&self) -> &[[Square; SIZE]; SIZE] {
        &self.cells
    }

    /// Counts the squares holding a player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&sq| sq == Square::Occupied(player))
            .count()
    }

    /// Counts the squares holding any mark.
    pub fn marked(&self) -> usize {
        self.count(Player::X) + self.count(Player::O)
    }

    /// True when the mark counts could arise from X-first alternating play.
    #[instrument]
    pub fn has_reachable_counts(&self) -> bool {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        x == o || x == o + 1
    }

    /// Returns a copy of this board with `square` written at `action`.
    ///
    /// Callers check bounds first.
    pub(super) fn with_square(mut self, action: Action, square: Square) -> Self {
        self.cells[action.row()][action.col()] = square;
        self
    }

    /// Formats the board as a nine-character row-major string.
    pub fn notation(&self) -> String {
        self.cells.iter().flatten().map(|sq| sq.symbol()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row.iter().map(|sq| sq.symbol().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
            if r + 1 < SIZE {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from its text notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty cell, nor a separator.
    #[display("Invalid board character {:?} at offset {}", character, offset)]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset in the input.
        offset: usize,
    },

    /// The input did not describe exactly nine cells.
    #[display("Board must have 9 cells, found {}", _0)]
    WrongCellCount(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses row-major notation such as `"XX./OO./..."`.
    ///
    /// `X`/`O` (either case) are marks; `.`, `_` and `-` are empty.
    /// Whitespace, `/` and `|` separate rows and are skipped.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(SIZE * SIZE);
        for (offset, character) in s.char_indices() {
            let square = match character {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '-' => Square::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                _ => return Err(BoardParseError::InvalidCharacter { character, offset }),
            };
            squares.push(square);
        }

        if squares.len() != SIZE * SIZE {
            return Err(BoardParseError::WrongCellCount(squares.len()));
        }

        let mut cells = [[Square::Empty; SIZE]; SIZE];
        for (i, square) in squares.into_iter().enumerate() {
            cells[i / SIZE][i % SIZE] = square;
        }
        Ok(Self { cells })
    }
}
