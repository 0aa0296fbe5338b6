//! # stratagem
//!
//! A two-player abstract game engine with exhaustive minimax move
//! selection.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Search**: The move-selection engine knows nothing
//!    about boards or hands. Any type implementing `GameState` can be
//!    searched.
//!
//! 2. **States Are Values**: Applying a move returns a new state and
//!    never mutates the old one, so searches explore hypothetical
//!    positions without touching the live game.
//!
//! 3. **Exhaustive By Design**: Minimax searches to every terminal
//!    leaf, with no pruning, no depth limit, and no caching. The
//!    iterative variant exists so deep state spaces cannot overflow the
//!    call stack, not to search less.
//!
//! ## Architecture
//!
//! - **Two Search Paths**: A recursive negamax and an explicit-frontier
//!   iterative traversal, kept as genuinely distinct implementations
//!   that must agree on every root.
//!
//! - **Persistent Data Structures**: Board-heavy states use `im` vectors
//!   so the clone taken for every hypothetical position shares
//!   structure.
//!
//! ## Modules
//!
//! - `core`: Players, per-player storage, deterministic RNG
//! - `game`: The `GameState`/`GameRules` contract and the `Game` session
//! - `games`: Chopsticks, stonehenge, and subtract-square
//! - `search`: Recursive and iterative minimax, the rough-outcome
//!   evaluator, the arena search tree
//! - `strategy`: Interactive, random, heuristic, and minimax strategies

pub mod core;
pub mod game;
pub mod games;
pub mod search;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{GameRng, Player, PlayerMap};

pub use crate::game::{
    Game, GameResult, GameRules, GameState, IllegalMove, MoveOf, ParseMoveError,
};

pub use crate::games::{
    Cell, Chopsticks, ChopsticksState, Hand, HandMove, Stonehenge, StonehengeState,
    SubtractSquare, SubtractSquareState,
};

pub use crate::search::{
    iterative_minimax, minimax_value, recursive_minimax, rough_outcome, NodeId, Resolution,
    Score, SearchNode, SearchTree, TreeStats,
};

pub use crate::strategy::{
    Interactive, IterativeMinimax, Random, RecursiveMinimax, RoughOutcome, Strategy,
    StrategyError,
};
