//! Human player that reads moves from a line-oriented input.

use super::Player;
use crate::games::tictactoe::{Action, Board, player_to_move};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Human player typing moves.
///
/// Accepts `row col`, `row,col`, a square number `1-9`, or a square name.
/// Unreadable or occupied squares are reported and asked for again; the
/// error surfaces only when the input ends.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a human player over the given input and prompt output.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose(&mut self, board: &Board) -> Result<Action> {
        writeln!(self.output, "\n{board}\n")?;
        loop {
            write!(
                self.output,
                "{} ({}) move [row col | 1-9 | name]: ",
                self.name,
                player_to_move(board)
            )?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed before {} moved", self.name);
            }

            match Action::parse_input(&line) {
                Some(action) if board.is_empty(action) => {
                    debug!(player = %self.name, %action, "Human chose square");
                    return Ok(action);
                }
                Some(action) => {
                    warn!(player = %self.name, %action, "Square already taken");
                    writeln!(self.output, "Square {action} is already taken.")?;
                }
                None => {
                    warn!(player = %self.name, input = line.trim(), "Unreadable move");
                    writeln!(self.output, "Could not read {:?} as a square.", line.trim())?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::initial_board;
    use std::io::Cursor;

    #[test]
    fn test_reprompts_until_valid() {
        let board: Board = "X........".parse().unwrap();
        let input = Cursor::new("nonsense\n0 0\n5\n");
        let mut output = Vec::new();
        let mut human = HumanPlayer::new("Ada", input, &mut output);

        let action = human.choose(&board).unwrap();
        assert_eq!(action, Action::new(1, 1));

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Could not read"));
        assert!(shown.contains("already taken"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut human = HumanPlayer::new("Ada", Cursor::new(""), Vec::new());
        assert!(human.choose(&initial_board()).is_err());
    }
}
