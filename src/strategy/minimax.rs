//! Move selection by exhaustive minimax, in both traversal flavors.

use crate::game::{Game, GameRules, MoveOf};
use crate::search::{iterative, recursive_minimax, TreeStats};

use super::{Strategy, StrategyError};

/// Exact minimax via call-stack recursion.
///
/// Optimal under minimax assumptions. Only suitable for games whose
/// state graph is acyclic (subtract-square, stonehenge).
#[derive(Clone, Copy, Debug, Default)]
pub struct RecursiveMinimax;

impl RecursiveMinimax {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<R: GameRules> Strategy<R> for RecursiveMinimax {
    fn select_move(&mut self, game: &Game<R>) -> Result<MoveOf<R>, StrategyError> {
        recursive_minimax(game.state()).ok_or(StrategyError::GameOver)
    }
}

/// Exact minimax via the explicit-frontier traversal.
///
/// Selects a move of the same value class as [`RecursiveMinimax`]
/// without growing the call stack with the search depth. Keeps the shape
/// of the last explored tree for diagnostics.
#[derive(Clone, Copy, Debug, Default)]
pub struct IterativeMinimax {
    last_stats: Option<TreeStats>,
}

impl IterativeMinimax {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics from the most recent search, if any.
    #[must_use]
    pub fn last_stats(&self) -> Option<TreeStats> {
        self.last_stats
    }
}

impl<R: GameRules> Strategy<R> for IterativeMinimax {
    fn select_move(&mut self, game: &Game<R>) -> Result<MoveOf<R>, StrategyError> {
        let resolution = iterative::resolve(game.state());
        self.last_stats = Some(resolution.stats);
        resolution.best_move.ok_or(StrategyError::GameOver)
    }
}
