//! Game rules trait and the session wrapper around a live game.

use crate::core::Player;
use crate::game::error::{IllegalMove, ParseMoveError};
use crate::game::state::GameState;

/// The move type of a rules implementation.
pub type MoveOf<R> = <<R as GameRules>::State as GameState>::Move;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// No winner. Unreachable for the supplied games, but structurally
    /// possible and handled everywhere.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Per-game configuration that is not part of a position.
///
/// One implementation per concrete game. Everything position-dependent
/// lives on the associated `State`.
pub trait GameRules {
    /// The game's state type.
    type State: GameState;

    /// Human-readable rules of the game.
    fn instructions(&self) -> String;

    /// Construct the starting position with `first_player` to move.
    fn initial_state(&self, first_player: Player) -> Self::State;

    /// Parse user input into a move.
    ///
    /// A successfully parsed move is not necessarily legal at the
    /// current state; legality is checked at [`Game::play`].
    fn parse_move(&self, input: &str) -> Result<MoveOf<Self>, ParseMoveError>;
}

/// A live game: rules plus the one real current state.
///
/// Strategies read the current state and explore hypothetical successors
/// as detached values; only [`Game::play`] advances the session.
#[derive(Clone, Debug)]
pub struct Game<R: GameRules> {
    rules: R,
    state: R::State,
}

impl<R: GameRules> Game<R> {
    /// Start a game with `first_player` to move.
    pub fn new(rules: R, first_player: Player) -> Self {
        let state = rules.initial_state(first_player);
        Self { rules, state }
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// The rules of this game.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Check whether the game is over at `state`.
    ///
    /// Takes the state explicitly so the same check applies to
    /// hypothetical positions during search.
    #[must_use]
    pub fn is_over(&self, state: &R::State) -> bool {
        state.is_terminal()
    }

    /// Check whether `player` has won at `state`.
    #[must_use]
    pub fn is_winner(&self, state: &R::State, player: Player) -> bool {
        state.winner(player)
    }

    /// Play a move, advancing the current state.
    ///
    /// Rejects illegal moves without touching the current state.
    pub fn play(&mut self, mv: &MoveOf<R>) -> Result<(), IllegalMove> {
        if !self.state.is_legal(mv) {
            return Err(IllegalMove::new(format!("{mv:?}")));
        }
        self.state = self.state.apply(mv);
        Ok(())
    }

    /// The result of the game, or `None` while it is still in progress.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.state.is_terminal() {
            return None;
        }
        for player in Player::both() {
            if self.state.winner(player) {
                return Some(GameResult::Winner(player));
            }
        }
        Some(GameResult::Draw)
    }

    /// Parse user input into a move of this game.
    pub fn parse_move(&self, input: &str) -> Result<MoveOf<R>, ParseMoveError> {
        self.rules.parse_move(input)
    }

    /// Human-readable rules of this game.
    #[must_use]
    pub fn instructions(&self) -> String {
        self.rules.instructions()
    }
}
