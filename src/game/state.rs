//! Game state trait.
//!
//! Games implement `GameState` to define one position of play:
//! - Whose turn it is
//! - Which moves are legal
//! - How a move produces the next position
//! - Who has won once no moves remain

use crate::core::Player;

/// One position of a two-player game.
///
/// States are pure values: `apply` returns a new state and never mutates
/// the receiver, so a search can hold any number of hypothetical positions
/// at once.
///
/// ## Implementation Notes
///
/// - `legal_moves`: must be deterministic; its order is the tie-break
///   order used by every strategy
/// - `apply`: only defined for legal moves; callers validate first
/// - All supported games follow the last-player-to-move-wins convention,
///   captured by the default `winner`
pub trait GameState: Clone + std::fmt::Debug {
    /// The game's move representation, opaque to the search.
    type Move: Clone + PartialEq + std::fmt::Debug;

    /// The player to move at this state.
    fn player(&self) -> Player;

    /// All legal moves, in the game's canonical order.
    ///
    /// Empty exactly when the game is over at this state.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply a move, producing the successor state.
    ///
    /// # Panics
    ///
    /// Panics if `mv` is not legal at this state. That is a
    /// programming-contract violation, not a recoverable condition;
    /// callers validate with [`is_legal`](Self::is_legal) first.
    fn apply(&self, mv: &Self::Move) -> Self;

    /// Check whether a move is legal at this state.
    fn is_legal(&self, mv: &Self::Move) -> bool {
        self.legal_moves().iter().any(|m| m == mv)
    }

    /// Check whether the game is over at this state.
    fn is_terminal(&self) -> bool {
        self.legal_moves().is_empty()
    }

    /// Check whether `player` has won at this state.
    ///
    /// Default: the game is over and `player` made the last move, i.e.
    /// `player` is not the side left to move. Games with a different
    /// terminal convention override this.
    fn winner(&self, player: Player) -> bool {
        self.is_terminal() && self.player() != player
    }
}
