//! Move selection by the rough-outcome heuristic.

use crate::game::{Game, GameRules, GameState, MoveOf};
use crate::search::rough_outcome;

use super::{Strategy, StrategyError};

/// Picks the move whose resulting state looks worst for the opponent.
///
/// For each legal move the child state is scored with
/// [`rough_outcome`] and negated (a bad outlook for the opponent is a
/// good one for the mover); the first strictly-best move in enumeration
/// order wins, so ties are deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoughOutcome;

impl RoughOutcome {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<R: GameRules> Strategy<R> for RoughOutcome {
    fn select_move(&mut self, game: &Game<R>) -> Result<MoveOf<R>, StrategyError> {
        let state = game.state();
        let mut best_move: Option<MoveOf<R>> = None;
        let mut best_outcome = -2.0;

        for mv in state.legal_moves() {
            let guessed = -rough_outcome(&state.apply(&mv));
            if guessed > best_outcome {
                best_outcome = guessed;
                best_move = Some(mv);
            }
        }

        best_move.ok_or(StrategyError::GameOver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;
    use crate::games::chopsticks::Chopsticks;
    use crate::games::subtract_square::SubtractSquare;

    #[test]
    fn test_takes_an_immediate_win() {
        // From 4, taking 4 ends the game; its child scores -1 for the
        // opponent, the best possible for the mover.
        let game = Game::new(SubtractSquare::new(4), Player::One);
        let mut strategy = RoughOutcome::new();

        assert_eq!(strategy.select_move(&game).unwrap(), 4);
    }

    #[test]
    fn test_first_seen_wins_on_ties() {
        // From the chopsticks start every move scores the same; the
        // canonical first move (ll) must be chosen.
        let game = Game::new(Chopsticks::new(), Player::One);
        let mut strategy = RoughOutcome::new();

        let mv = strategy.select_move(&game).unwrap();
        assert_eq!(mv.to_string(), "ll");
    }

    #[test]
    fn test_finished_game_is_an_error() {
        let game = Game::new(SubtractSquare::new(0), Player::One);
        let mut strategy = RoughOutcome::new();

        assert!(matches!(
            strategy.select_move(&game),
            Err(StrategyError::GameOver)
        ));
    }
}
