//! Recursive minimax: exhaustive exact search on the call stack.
//!
//! Search depth equals the longest line of play from the root, so the
//! call stack grows with the game: at most the starting number for
//! subtract-square (every move shrinks the value by at least 1) and at
//! most 25 plies for the largest stonehenge board (one cell per ply).
//! Chopsticks admits cycles and therefore must not be searched
//! exhaustively. For deeper state spaces use the iterative traversal in
//! [`super::iterative`], which is a genuinely separate code path.

use super::{terminal_score, Score};
use crate::game::GameState;

/// Exact minimax value for the side to move at `state`.
///
/// Terminal states are scored by [`terminal_score`]; anything else is
/// `max over moves of -minimax_value(child)`.
pub fn minimax_value<S: GameState>(state: &S) -> Score {
    let moves = state.legal_moves();
    if moves.is_empty() {
        return terminal_score(state);
    }

    // Every child is evaluated: exhaustive search to game end, no
    // cutoffs.
    let mut best = Score::Loss;
    for mv in &moves {
        let value = -minimax_value(&state.apply(mv));
        if value > best {
            best = value;
        }
    }
    best
}

/// Select a minimax-optimal move for the side to move at `state`.
///
/// Each root move is bucketed by the negated value of its child
/// (win/draw/loss for the mover); the first move in enumeration order
/// from the best non-empty bucket is returned. That first-of-best-bucket
/// tie-break is part of the observable contract.
///
/// Returns `None` iff the game is already over at `state`.
pub fn recursive_minimax<S: GameState>(state: &S) -> Option<S::Move> {
    let mut first_win: Option<S::Move> = None;
    let mut first_draw: Option<S::Move> = None;
    let mut first_loss: Option<S::Move> = None;

    for mv in state.legal_moves() {
        let bucket = match -minimax_value(&state.apply(&mv)) {
            Score::Win => &mut first_win,
            Score::Draw => &mut first_draw,
            Score::Loss => &mut first_loss,
        };
        if bucket.is_none() {
            *bucket = Some(mv);
        }
    }

    first_win.or(first_draw).or(first_loss)
}
