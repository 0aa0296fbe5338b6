//! The concrete games: swappable `GameRules`/`GameState` implementations.
//!
//! The search engine never depends on anything in this module; each game
//! is consumed purely through the contract in [`crate::game`].

pub mod chopsticks;
pub mod stonehenge;
pub mod subtract_square;

pub use chopsticks::{Chopsticks, ChopsticksState, Hand, HandMove};
pub use stonehenge::{Cell, Stonehenge, StonehengeState};
pub use subtract_square::{SubtractSquare, SubtractSquareState};
