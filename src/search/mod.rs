//! Move selection by exhaustive game-tree search.
//!
//! ## Overview
//!
//! Two implementations of exact minimax over any [`GameState`]:
//!
//! - **Recursive**: the game tree lives on the call stack
//!   ([`minimax_value`], [`recursive_minimax`])
//! - **Iterative**: an explicit LIFO frontier over an arena
//!   [`SearchTree`], for state spaces whose depth would overflow the
//!   call stack ([`iterative::resolve`], [`iterative_minimax`])
//!
//! Both search to every terminal leaf: no pruning, no depth limit, no
//! transposition caching. They return moves of the same value class for
//! the same root, differing only in traversal machinery.
//!
//! The cheaper [`rough_outcome`] evaluator looks only one or two plies
//! ahead and backs the heuristic strategy.
//!
//! ## Value convention
//!
//! A [`Score`] is always from the perspective of the side to move at the
//! scored state; a child's score negates into the parent's perspective,
//! giving the recurrence `value(s) = max over moves of -value(apply(s, m))`.

pub mod heuristic;
pub mod iterative;
pub mod recursive;
pub mod tree;

pub use heuristic::{rough_outcome, DRAW, LOSS, WIN};
pub use iterative::{iterative_minimax, Resolution};
pub use recursive::{minimax_value, recursive_minimax};
pub use tree::{NodeId, SearchNode, SearchTree, TreeStats};

use serde::{Deserialize, Serialize};

use crate::game::GameState;

/// Exact game-theoretic value for the side to move: a guaranteed loss,
/// draw, or win under optimal play by both sides.
///
/// Ordered `Loss < Draw < Win` so that `max` picks the best outcome.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Score {
    Loss,
    Draw,
    Win,
}

impl Score {
    /// The score as a signed unit value: -1, 0, or 1.
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Score::Loss => -1,
            Score::Draw => 0,
            Score::Win => 1,
        }
    }
}

impl std::ops::Neg for Score {
    type Output = Score;

    /// The same outcome seen from the other player: a win for one side
    /// is a loss for the other.
    fn neg(self) -> Score {
        match self {
            Score::Loss => Score::Win,
            Score::Draw => Score::Draw,
            Score::Win => Score::Loss,
        }
    }
}

/// Score a terminal state for its side to move.
///
/// Under the last-player-to-move-wins convention this is always a loss
/// for the side left without a move, but a degenerate no-winner terminal
/// resolves to a draw rather than an error, and a state claiming the
/// mover as winner resolves to a win.
pub fn terminal_score<S: GameState>(state: &S) -> Score {
    let mover = state.player();
    if state.winner(mover) {
        Score::Win
    } else if state.winner(mover.opponent()) {
        Score::Loss
    } else {
        Score::Draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_ordering() {
        assert!(Score::Loss < Score::Draw);
        assert!(Score::Draw < Score::Win);
        assert_eq!(
            [Score::Draw, Score::Win, Score::Loss].into_iter().max(),
            Some(Score::Win)
        );
    }

    #[test]
    fn test_score_negation() {
        assert_eq!(-Score::Win, Score::Loss);
        assert_eq!(-Score::Loss, Score::Win);
        assert_eq!(-Score::Draw, Score::Draw);
    }

    #[test]
    fn test_score_value() {
        assert_eq!(Score::Loss.value(), -1);
        assert_eq!(Score::Draw.value(), 0);
        assert_eq!(Score::Win.value(), 1);
    }

    #[test]
    fn test_score_serialization() {
        let json = serde_json::to_string(&Score::Win).unwrap();
        let deserialized: Score = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Score::Win);
    }
}
