//! Uniformly random move selection.

use crate::core::GameRng;
use crate::game::{Game, GameRules, GameState, MoveOf};

use super::{Strategy, StrategyError};

/// Picks uniformly among the legal moves.
///
/// Seeded for reproducible transcripts; use [`Random::from_entropy`] for
/// a fresh sequence each run.
#[derive(Clone, Debug)]
pub struct Random {
    rng: GameRng,
}

impl Random {
    /// A random strategy with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// A random strategy seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }
}

impl<R: GameRules> Strategy<R> for Random {
    fn select_move(&mut self, game: &Game<R>) -> Result<MoveOf<R>, StrategyError> {
        let moves = game.state().legal_moves();
        self.rng
            .choose(&moves)
            .cloned()
            .ok_or(StrategyError::GameOver)
    }
}
