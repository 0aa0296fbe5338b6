//! Interactive move selection over injected I/O handles.

use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

use crate::game::{Game, GameRules, GameState, MoveOf};

use super::{Strategy, StrategyError};

/// Prompts a human for a move.
///
/// Generic over the reader and writer so tests can drive it with
/// in-memory buffers. Re-prompts on unparseable input and on moves that
/// are not legal at the current state; errors once the input source is
/// exhausted.
#[derive(Debug)]
pub struct Interactive<I, O> {
    input: I,
    output: O,
}

impl Interactive<BufReader<Stdin>, Stdout> {
    /// An interactive strategy on the process's stdin/stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self {
            input: BufReader::new(std::io::stdin()),
            output: std::io::stdout(),
        }
    }
}

impl<I: BufRead, O: Write> Interactive<I, O> {
    /// An interactive strategy over the given handles.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

impl<R, I, O> Strategy<R> for Interactive<I, O>
where
    R: GameRules,
    I: BufRead,
    O: Write,
{
    fn select_move(&mut self, game: &Game<R>) -> Result<MoveOf<R>, StrategyError> {
        if game.state().is_terminal() {
            return Err(StrategyError::GameOver);
        }

        loop {
            write!(self.output, "Enter a move: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(StrategyError::InputClosed);
            }

            match game.parse_move(line.trim()) {
                Ok(mv) if game.state().is_legal(&mv) => return Ok(mv),
                Ok(_) => writeln!(self.output, "That move is not legal here.")?,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }
}
