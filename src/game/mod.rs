//! The game contract consumed by every move-selection strategy.
//!
//! - `GameState`: an immutable value describing one position: whose turn
//!   it is, which moves are legal, and how a move produces the next state.
//! - `GameRules`: per-game configuration that is not part of a position:
//!   instructions, initial-state construction, move-string parsing.
//! - `Game`: a session owning the rules and the one real current state.
//!
//! Search never touches a `Game`'s current state: hypothetical states are
//! passed around explicitly as values, so there is nothing to restore when
//! a search returns.

pub mod error;
pub mod session;
pub mod state;

pub use error::{IllegalMove, ParseMoveError};
pub use session::{Game, GameResult, GameRules, MoveOf};
pub use state::GameState;
