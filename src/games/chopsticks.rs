//! Chopsticks: a finger-counting game.
//!
//! Each player has two hands starting at one finger. A move adds the
//! value of one of your live hands to one of the opponent's live hands.
//! A hand reaching exactly 5 dies (resets to 0); above 5 it wraps by
//! subtracting 5. A player with both hands dead cannot move and loses.
//!
//! Note: the state graph contains cycles, so exhaustive minimax does not
//! terminate on this game. Use the random or rough-outcome strategies.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerMap};
use crate::game::{GameRules, GameState, ParseMoveError};

/// One of a player's two hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hand::Left => write!(f, "l"),
            Hand::Right => write!(f, "r"),
        }
    }
}

/// A chopsticks move: add the mover's `from` hand to the opponent's `to`
/// hand.
///
/// Text form is two letters, mover's hand first: `ll`, `lr`, `rl`, `rr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandMove {
    pub from: Hand,
    pub to: Hand,
}

impl HandMove {
    /// All four moves in canonical order: `ll`, `lr`, `rl`, `rr`.
    pub fn all() -> impl Iterator<Item = HandMove> {
        [Hand::Left, Hand::Right].into_iter().flat_map(|from| {
            [Hand::Left, Hand::Right]
                .into_iter()
                .map(move |to| HandMove { from, to })
        })
    }
}

impl std::fmt::Display for HandMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// The finger counts of one player's two hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingers {
    pub left: u8,
    pub right: u8,
}

impl Fingers {
    fn get(&self, hand: Hand) -> u8 {
        match hand {
            Hand::Left => self.left,
            Hand::Right => self.right,
        }
    }

    fn get_mut(&mut self, hand: Hand) -> &mut u8 {
        match hand {
            Hand::Left => &mut self.left,
            Hand::Right => &mut self.right,
        }
    }

    fn is_alive(&self, hand: Hand) -> bool {
        self.get(hand) > 0
    }
}

/// Rules of chopsticks. Carries no parameters; both players always start
/// with one finger on each hand.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Chopsticks;

impl Chopsticks {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl GameRules for Chopsticks {
    type State = ChopsticksState;

    fn instructions(&self) -> String {
        "2 players have two hands beginning with a value of 1 on each hand. \
         Players take turns adding values from one of their hands to one of \
         their opponent's hands. When the value reaches 5, the hand becomes \
         'dead'; if the value becomes greater than 5, it wraps around by \
         subtracting 5. The first player to get both hands in the 'dead' \
         state is the loser."
            .to_string()
    }

    fn initial_state(&self, first_player: Player) -> ChopsticksState {
        ChopsticksState::new(
            first_player,
            PlayerMap::with_value(Fingers { left: 1, right: 1 }),
        )
    }

    fn parse_move(&self, input: &str) -> Result<HandMove, ParseMoveError> {
        let parse_hand = |c| match c {
            'l' => Some(Hand::Left),
            'r' => Some(Hand::Right),
            _ => None,
        };

        let mut chars = input.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => match (parse_hand(a), parse_hand(b)) {
                (Some(from), Some(to)) => Ok(HandMove { from, to }),
                _ => Err(ParseMoveError::new(input, "one of ll, lr, rl, rr")),
            },
            _ => Err(ParseMoveError::new(input, "one of ll, lr, rl, rr")),
        }
    }
}

/// A chopsticks position: each player's finger counts and the side to
/// move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChopsticksState {
    player: Player,
    fingers: PlayerMap<Fingers>,
}

impl ChopsticksState {
    /// A position with the given finger counts and `player` to move.
    #[must_use]
    pub fn new(player: Player, fingers: PlayerMap<Fingers>) -> Self {
        Self { player, fingers }
    }

    /// The finger counts of `player`'s hands.
    #[must_use]
    pub fn fingers(&self, player: Player) -> Fingers {
        self.fingers[player]
    }
}

impl std::fmt::Display for ChopsticksState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p1 = self.fingers[Player::One];
        let p2 = self.fingers[Player::Two];
        write!(
            f,
            "Player 1: {} - {}; Player 2: {} - {}",
            p1.left, p1.right, p2.left, p2.right
        )
    }
}

impl GameState for ChopsticksState {
    type Move = HandMove;

    fn player(&self) -> Player {
        self.player
    }

    /// A move is legal when the mover's source hand and the opponent's
    /// target hand are both alive. Canonical order: `ll`, `lr`, `rl`,
    /// `rr`.
    fn legal_moves(&self) -> Vec<HandMove> {
        let own = self.fingers[self.player];
        let opp = self.fingers[self.player.opponent()];

        HandMove::all()
            .filter(|mv| own.is_alive(mv.from) && opp.is_alive(mv.to))
            .collect()
    }

    fn apply(&self, mv: &HandMove) -> Self {
        assert!(self.is_legal(mv), "illegal chopsticks move {mv}");

        let mut fingers = self.fingers;
        let added = fingers[self.player].get(mv.from);
        let target = fingers[self.player.opponent()].get_mut(mv.to);
        *target += added;

        // A hand at exactly 5 dies; above 5 it wraps. Max is 4 + 4 = 8.
        if *target == 5 {
            *target = 0;
        } else if *target > 5 {
            *target -= 5;
        }

        Self {
            player: self.player.opponent(),
            fingers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(player: Player, p1: (u8, u8), p2: (u8, u8)) -> ChopsticksState {
        let fingers = PlayerMap::new(|p| {
            let (left, right) = if p == Player::One { p1 } else { p2 };
            Fingers { left, right }
        });
        ChopsticksState::new(player, fingers)
    }

    #[test]
    fn test_initial_moves() {
        let start = Chopsticks::new().initial_state(Player::One);
        let rendered: Vec<String> = start
            .legal_moves()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rendered, vec!["ll", "lr", "rl", "rr"]);
    }

    #[test]
    fn test_left_to_left_from_start() {
        let start = Chopsticks::new().initial_state(Player::One);
        let mv = HandMove {
            from: Hand::Left,
            to: Hand::Left,
        };
        let next = start.apply(&mv);

        assert_eq!(next.fingers(Player::Two).left, 2);
        assert_eq!(next.fingers(Player::Two).right, 1);
        assert_eq!(next.fingers(Player::One).left, 1);
        assert_eq!(next.player(), Player::Two);
        // The source state is untouched.
        assert_eq!(start.fingers(Player::Two).left, 1);
    }

    #[test]
    fn test_hand_at_five_dies() {
        let s = state(Player::One, (1, 1), (4, 1));
        let next = s.apply(&HandMove {
            from: Hand::Left,
            to: Hand::Left,
        });
        assert_eq!(next.fingers(Player::Two).left, 0);
    }

    #[test]
    fn test_hand_above_five_wraps() {
        let s = state(Player::One, (4, 1), (4, 1));
        let next = s.apply(&HandMove {
            from: Hand::Left,
            to: Hand::Left,
        });
        assert_eq!(next.fingers(Player::Two).left, 3);
    }

    #[test]
    fn test_dead_hands_restrict_moves() {
        // p1's left hand is dead: only right-hand moves remain.
        let s = state(Player::One, (0, 2), (1, 1));
        let rendered: Vec<String> =
            s.legal_moves().iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["rl", "rr"]);

        // p2's left hand is dead: only its right hand can be targeted.
        let s = state(Player::One, (1, 2), (0, 1));
        let rendered: Vec<String> =
            s.legal_moves().iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["lr", "rr"]);
    }

    #[test]
    fn test_single_live_hand_each_still_has_a_move() {
        // Down to one live left hand per side the game goes on: the
        // mover can still add its left hand to the opponent's left.
        let s = state(Player::One, (1, 0), (2, 0));

        assert!(!s.is_terminal());
        let rendered: Vec<String> =
            s.legal_moves().iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["ll"]);
    }

    #[test]
    fn test_both_hands_dead_loses() {
        let s = state(Player::One, (0, 0), (3, 1));

        assert!(s.is_terminal());
        assert!(s.winner(Player::Two));
        assert!(!s.winner(Player::One));
    }

    #[test]
    fn test_parse_move() {
        let rules = Chopsticks::new();
        assert_eq!(
            rules.parse_move("rl"),
            Ok(HandMove {
                from: Hand::Right,
                to: Hand::Left
            })
        );
        assert!(rules.parse_move("xx").is_err());
        assert!(rules.parse_move("lll").is_err());
        assert!(rules.parse_move("").is_err());
    }

    #[test]
    fn test_state_serialization() {
        let s = state(Player::Two, (0, 3), (2, 4));
        let json = serde_json::to_string(&s).unwrap();
        let deserialized: ChopsticksState = serde_json::from_str(&json).unwrap();
        assert_eq!(s, deserialized);
    }
}
