//! Keyboard input
//!
//! Keys are matched on `KeyboardEvent.code`, so WASD works on any layout.

use crate::sim::{Direction, GameState};

/// Map a key code to a direction (arrows and WASD)
pub fn direction_for_key(code: &str) -> Option<Direction> {
    match code {
        "ArrowLeft" | "KeyA" => Some(Direction::Left),
        "ArrowUp" | "KeyW" => Some(Direction::Up),
        "ArrowRight" | "KeyD" => Some(Direction::Right),
        "ArrowDown" | "KeyS" => Some(Direction::Down),
        _ => None,
    }
}

/// Steer toward `requested` unless it would reverse the snake onto itself.
/// `heading` is the way the snake last moved, which can lag several presses
/// behind `state.direction` within one tick. Returns true if the direction changed.
pub fn steer(state: &mut GameState, heading: Direction, requested: Direction) -> bool {
    if requested == heading.opposite() || requested == state.direction {
        return false;
    }
    state.direction = requested;
    true
}

/// Apply a key press to the game state. Unmapped keys are ignored.
pub fn apply_key(state: &mut GameState, heading: Direction, code: &str) -> bool {
    match direction_for_key(code) {
        Some(direction) => steer(state, heading, direction),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(direction_for_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(direction_for_key("KeyW"), Some(Direction::Up));
        assert_eq!(direction_for_key("KeyD"), Some(Direction::Right));
        assert_eq!(direction_for_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(direction_for_key("KeyQ"), None);
        assert_eq!(direction_for_key("Space"), None);
    }

    #[test]
    fn test_reversal_rejected() {
        let mut state = GameState::default();
        assert_eq!(state.direction, Direction::Right);
        assert!(!apply_key(&mut state, Direction::Right, "ArrowLeft"));
        assert!(!apply_key(&mut state, Direction::Right, "KeyA"));
        assert_eq!(state.direction, Direction::Right);
    }

    #[test]
    fn test_turns_accepted() {
        let mut state = GameState::default();
        assert!(apply_key(&mut state, Direction::Right, "ArrowUp"));
        assert_eq!(state.direction, Direction::Up);
        // The snake has moved up since, so down is now the reversal
        assert!(!apply_key(&mut state, Direction::Up, "KeyS"));
        assert!(apply_key(&mut state, Direction::Up, "KeyA"));
        assert_eq!(state.direction, Direction::Left);
    }

    #[test]
    fn test_two_presses_in_one_tick_cannot_reverse() {
        let mut state = GameState::default();
        assert!(apply_key(&mut state, Direction::Right, "ArrowUp"));
        // Still heading right: left would fold back into the neck
        assert!(!apply_key(&mut state, Direction::Right, "ArrowLeft"));
        assert_eq!(state.direction, Direction::Up);
        // Down is fine, it is not a reversal of the actual movement
        assert!(apply_key(&mut state, Direction::Right, "ArrowDown"));
        assert_eq!(state.direction, Direction::Down);
    }

    #[test]
    fn test_unmapped_key_ignored() {
        let mut state = GameState {
            score: 30,
            direction: Direction::Down,
        };
        assert!(!apply_key(&mut state, Direction::Down, "Enter"));
        assert_eq!(state.direction, Direction::Down);
        assert_eq!(state.score, 30);
    }
}
