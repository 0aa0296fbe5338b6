//! Subtract-square: players alternately subtract a perfect square from a
//! shared number; whoever reaches exactly zero wins.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::game::{GameRules, GameState, ParseMoveError};

/// Rules of a subtract-square game with a fixed starting number.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SubtractSquare {
    starting_value: u32,
}

impl SubtractSquare {
    /// Create the rules for a game starting at `starting_value`.
    #[must_use]
    pub fn new(starting_value: u32) -> Self {
        Self { starting_value }
    }

    /// The starting number.
    #[must_use]
    pub fn starting_value(&self) -> u32 {
        self.starting_value
    }
}

impl GameRules for SubtractSquare {
    type State = SubtractSquareState;

    fn instructions(&self) -> String {
        "2 players take turns subtracting perfect squares from a starting \
         number. The winner is the person who subtracts to 0."
            .to_string()
    }

    fn initial_state(&self, first_player: Player) -> SubtractSquareState {
        SubtractSquareState::new(first_player, self.starting_value)
    }

    fn parse_move(&self, input: &str) -> Result<u32, ParseMoveError> {
        input
            .trim()
            .parse()
            .map_err(|_| ParseMoveError::new(input, "a decimal integer"))
    }
}

/// A subtract-square position: the remaining number and the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubtractSquareState {
    player: Player,
    value: u32,
}

impl SubtractSquareState {
    /// A position with `value` remaining and `player` to move.
    #[must_use]
    pub fn new(player: Player, value: u32) -> Self {
        Self { player, value }
    }

    /// The remaining number.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl std::fmt::Display for SubtractSquareState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The current value is {}", self.value)
    }
}

impl GameState for SubtractSquareState {
    type Move = u32;

    fn player(&self) -> Player {
        self.player
    }

    /// Perfect squares up to the remaining value, ascending.
    fn legal_moves(&self) -> Vec<u32> {
        (1u32..)
            .map(|n| n * n)
            .take_while(|sq| *sq <= self.value)
            .collect()
    }

    fn apply(&self, mv: &u32) -> Self {
        assert!(self.is_legal(mv), "illegal subtract-square move {mv}");
        Self {
            player: self.player.opponent(),
            value: self.value - mv,
        }
    }

    fn is_terminal(&self) -> bool {
        // Squares start at 1, so exactly the zero state has no moves.
        self.value == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_moves_are_squares() {
        let state = SubtractSquareState::new(Player::One, 12);
        assert_eq!(state.legal_moves(), vec![1, 4, 9]);

        let state = SubtractSquareState::new(Player::One, 4);
        assert_eq!(state.legal_moves(), vec![1, 4]);

        let state = SubtractSquareState::new(Player::One, 0);
        assert!(state.legal_moves().is_empty());
    }

    #[test]
    fn test_apply_subtracts_and_flips_turn() {
        let state = SubtractSquareState::new(Player::One, 12);
        let next = state.apply(&9);

        assert_eq!(next.value(), 3);
        assert_eq!(next.player(), Player::Two);
        // The source state is untouched.
        assert_eq!(state.value(), 12);
        assert_eq!(state.player(), Player::One);
    }

    #[test]
    #[should_panic(expected = "illegal subtract-square move")]
    fn test_apply_rejects_non_square() {
        let state = SubtractSquareState::new(Player::One, 12);
        let _ = state.apply(&3);
    }

    #[test]
    fn test_last_mover_wins() {
        let state = SubtractSquareState::new(Player::One, 4);
        let end = state.apply(&4);

        assert!(end.is_terminal());
        assert!(end.winner(Player::One));
        assert!(!end.winner(Player::Two));
    }

    #[test]
    fn test_parse_move() {
        let rules = SubtractSquare::new(20);
        assert_eq!(rules.parse_move(" 9 "), Ok(9));
        assert!(rules.parse_move("nine").is_err());
        assert!(rules.parse_move("-1").is_err());
    }

    #[test]
    fn test_state_serialization() {
        let state = SubtractSquareState::new(Player::Two, 17);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: SubtractSquareState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
