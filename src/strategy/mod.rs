//! Move-selection strategies.
//!
//! Strategies are trait-based so a game loop can mix and match them per
//! player:
//! - `Interactive`: prompt a human over injected reader/writer handles
//! - `Random`: uniform choice over the legal moves
//! - `RoughOutcome`: one-or-two-ply heuristic lookahead
//! - `RecursiveMinimax` / `IterativeMinimax`: exhaustive exact search
//!
//! Every strategy reads the game's current state and explores
//! hypothetical successors as detached values; none of them mutates the
//! session it is handed.

pub mod heuristic;
pub mod interactive;
pub mod minimax;
pub mod random;

pub use heuristic::RoughOutcome;
pub use interactive::Interactive;
pub use minimax::{IterativeMinimax, RecursiveMinimax};
pub use random::Random;

use crate::game::{Game, GameRules, MoveOf};

/// A move-selection policy for one player.
pub trait Strategy<R: GameRules> {
    /// Select a move at the game's current state.
    ///
    /// Any failure aborts selection for this turn and leaves the game
    /// untouched; there is no retry inside a strategy call.
    fn select_move(&mut self, game: &Game<R>) -> Result<MoveOf<R>, StrategyError>;
}

/// Why a strategy could not produce a move.
#[derive(Debug)]
pub enum StrategyError {
    /// The game is already over; there is no move to select.
    GameOver,
    /// The interactive input source was exhausted before a valid move
    /// was entered.
    InputClosed,
    /// Reading or writing interactive I/O failed.
    Io(std::io::Error),
}

impl std::fmt::Display for StrategyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyError::GameOver => write!(f, "the game is already over"),
            StrategyError::InputClosed => write!(f, "input closed before a valid move was entered"),
            StrategyError::Io(err) => write!(f, "interactive i/o failed: {err}"),
        }
    }
}

impl std::error::Error for StrategyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StrategyError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StrategyError {
    fn from(err: std::io::Error) -> Self {
        StrategyError::Io(err)
    }
}
