//! Rough-outcome evaluator: a one-or-two-ply estimate of the mover's
//! prospects.
//!
//! Cheaper than minimax, better than random: the evaluator inspects only
//! immediate moves and immediate replies, never the rest of the game.

use super::terminal_score;
use crate::game::GameState;

/// Best possible outcome for the side to move.
pub const WIN: f64 = 1.0;

/// Worst possible outcome for the side to move.
pub const LOSS: f64 = -1.0;

/// No clear short-range outcome.
pub const DRAW: f64 = 0.0;

/// Estimate the prospects of the side to move at `state`, in `[-1, 1]`.
///
/// - For a finished game, the terminal score of the side to move.
/// - `1` if some legal move immediately ends the game (the mover wins on
///   the spot; found in move-enumeration order and short-circuits).
/// - `-1` if after **every** legal move the opponent has a reply that
///   immediately ends the game (the opponent can always win back).
/// - `0` otherwise: no forced outcome within two plies.
///
/// The all-branches reading of the `-1` rule is the contract; a partial
/// scan of replies is not.
pub fn rough_outcome<S: GameState>(state: &S) -> f64 {
    let moves = state.legal_moves();
    if moves.is_empty() {
        return f64::from(terminal_score(state).value());
    }

    let mut opponent_always_wins = true;
    for mv in &moves {
        let child = state.apply(mv);
        let replies = child.legal_moves();
        if replies.is_empty() {
            return WIN;
        }
        let opponent_wins_here = replies
            .iter()
            .any(|reply| child.apply(reply).is_terminal());
        if !opponent_wins_here {
            opponent_always_wins = false;
        }
    }

    if opponent_always_wins {
        LOSS
    } else {
        DRAW
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;
    use crate::games::stonehenge::StonehengeState;
    use crate::games::subtract_square::SubtractSquareState;

    fn subtract(value: u32) -> SubtractSquareState {
        SubtractSquareState::new(Player::One, value)
    }

    #[test]
    fn test_immediate_win_returns_one() {
        // From 4, taking 4 ends the game at once.
        assert_eq!(rough_outcome(&subtract(4)), WIN);
        assert_eq!(rough_outcome(&subtract(1)), WIN);
    }

    #[test]
    fn test_forced_loss_returns_minus_one() {
        // From 2 the only move leaves 1, and the opponent takes it.
        assert_eq!(rough_outcome(&subtract(2)), LOSS);
    }

    #[test]
    fn test_unclear_position_returns_zero() {
        // From 3: taking 1 leaves 2, and the opponent's only reply (1)
        // does not end the game. Not a two-ply forced outcome.
        assert_eq!(rough_outcome(&subtract(3)), DRAW);
    }

    #[test]
    fn test_all_branches_must_lose_for_minus_one() {
        // From 7 the moves leave 6 or 3, and from neither can the
        // opponent reach 0 in one reply. Not a rough loss, even though 7
        // is lost under full minimax.
        assert_eq!(rough_outcome(&subtract(7)), DRAW);
    }

    #[test]
    fn test_terminal_state_scores_side_to_move() {
        // At 0 the side to move has already lost.
        assert_eq!(rough_outcome(&subtract(0)), LOSS);
    }

    #[test]
    fn test_result_is_always_a_trit() {
        for value in 0..=30 {
            let estimate = rough_outcome(&subtract(value));
            assert!(
                estimate == WIN || estimate == LOSS || estimate == DRAW,
                "value {value} produced {estimate}"
            );
        }
    }

    #[test]
    fn test_smallest_stonehenge_is_an_immediate_win() {
        // Any first claim on the side-1 board captures half the
        // ley-lines outright.
        let state = StonehengeState::new(Player::One, 1);
        assert_eq!(rough_outcome(&state), WIN);
    }
}
