//! Integration tests for the three concrete games and the game session.

use stratagem::core::Player;
use stratagem::game::{Game, GameResult, GameState};
use stratagem::games::chopsticks::{Chopsticks, Hand, HandMove};
use stratagem::games::stonehenge::{Cell, Stonehenge};
use stratagem::games::subtract_square::SubtractSquare;

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_play_advances_the_session() {
    let mut game = Game::new(SubtractSquare::new(20), Player::One);

    game.play(&16).unwrap();

    assert_eq!(game.state().value(), 4);
    assert_eq!(game.state().player(), Player::Two);
    assert_eq!(game.result(), None);
}

#[test]
fn test_illegal_move_leaves_state_untouched() {
    let mut game = Game::new(SubtractSquare::new(20), Player::One);

    assert!(game.play(&3).is_err());

    assert_eq!(game.state().value(), 20);
    assert_eq!(game.state().player(), Player::One);
}

#[test]
fn test_result_reports_the_last_mover() {
    let mut game = Game::new(SubtractSquare::new(4), Player::One);

    game.play(&4).unwrap();

    assert!(game.is_over(game.state()));
    assert!(game.is_winner(game.state(), Player::One));
    assert_eq!(game.result(), Some(GameResult::Winner(Player::One)));
}

#[test]
fn test_parse_move_goes_through_the_rules() {
    let game = Game::new(Chopsticks::new(), Player::One);

    let mv = game.parse_move("lr").unwrap();
    assert_eq!(
        mv,
        HandMove {
            from: Hand::Left,
            to: Hand::Right
        }
    );
    assert!(game.parse_move("zz").is_err());
}

// =============================================================================
// Terminal Correctness
// =============================================================================

#[test]
fn test_terminal_states_have_no_moves_and_one_winner() {
    // Subtract-square at zero.
    let mut game = Game::new(SubtractSquare::new(9), Player::Two);
    game.play(&9).unwrap();
    let state = game.state();

    assert!(state.is_terminal());
    assert!(state.legal_moves().is_empty());
    assert_ne!(state.winner(Player::One), state.winner(Player::Two));

    // Smallest stonehenge board after one claim.
    let mut game = Game::new(Stonehenge::new(1), Player::One);
    game.play(&Cell(2)).unwrap();
    let state = game.state();

    assert!(state.is_terminal());
    assert!(state.legal_moves().is_empty());
    assert_ne!(state.winner(Player::One), state.winner(Player::Two));
}

// =============================================================================
// Chopsticks Scenario
// =============================================================================

#[test]
fn test_chopsticks_opening_exchange() {
    let mut game = Game::new(Chopsticks::new(), Player::One);

    // p1 adds its left hand (1) to p2's left hand.
    game.play(&game.parse_move("ll").unwrap()).unwrap();

    let state = game.state();
    assert_eq!(state.fingers(Player::Two).left, 2);
    assert_eq!(state.fingers(Player::Two).right, 1);
    assert_eq!(state.fingers(Player::One).left, 1);
    assert_eq!(state.fingers(Player::One).right, 1);
    assert_eq!(state.player(), Player::Two);
}

#[test]
fn test_chopsticks_game_to_completion() {
    // Drive a short scripted game: hands die at 5 and the player left
    // with two dead hands loses.
    let mut game = Game::new(Chopsticks::new(), Player::One);

    let script = ["ll", "ll", "ll", "rl", "ll", "rr", "lr", "rr"];
    for raw in script {
        let mv = game.parse_move(raw).unwrap();
        if game.play(&mv).is_err() {
            break;
        }
        if game.result().is_some() {
            break;
        }
    }

    // Whatever the exact line, the invariants hold along the way.
    let state = game.state();
    for player in [Player::One, Player::Two] {
        let fingers = state.fingers(player);
        assert!(fingers.left < 5, "a hand at five must have died");
        assert!(fingers.right < 5, "a hand at five must have died");
    }
}

// =============================================================================
// Stonehenge Scenario
// =============================================================================

#[test]
fn test_stonehenge_minimal_board_first_claim_wins() {
    let mut game = Game::new(Stonehenge::new(1), Player::One);

    // Each cell of the side-1 board sits on three of the six ley-lines;
    // one claim captures all three, which is half, ending the game.
    game.play(&Cell(0)).unwrap();

    assert_eq!(game.state().captured_lines(Player::One), 3);
    assert_eq!(game.state().line_count(), 6);
    assert_eq!(game.result(), Some(GameResult::Winner(Player::One)));
}

#[test]
fn test_stonehenge_line_flips_at_half_control() {
    let game = Game::new(Stonehenge::new(2), Player::One);

    // Line "GDA" has three members; claiming two of them captures it.
    let state = game.state().apply(&Cell(6)); // G, p1
    let state = state.apply(&Cell(2)); // C, p2
    assert_eq!(state.line_owner(4), None, "one of three members is not half");

    let state = state.apply(&Cell(3)); // D, p1
    assert_eq!(state.line_owner(4), Some(Player::One));
}

// =============================================================================
// State Purity
// =============================================================================

#[test]
fn test_apply_is_repeatable() {
    let state = Game::new(Stonehenge::new(3), Player::One).state().clone();

    let once = state.apply(&Cell(5));
    let twice = state.apply(&Cell(5));

    assert_eq!(once, twice);
    assert_eq!(state.cell_owner(Cell(5)), None);
}
