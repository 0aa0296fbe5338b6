//! Core engine types: players and deterministic randomness.
//!
//! These are the game-agnostic building blocks shared by the game
//! contract, the concrete games, and the move-selection strategies.

pub mod player;
pub mod rng;

pub use player::{Player, PlayerMap};
pub use rng::GameRng;
