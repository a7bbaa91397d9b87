//! Keyboard input
//!
//! Key presses are applied to the state immediately, between ticks.

use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::PADDLE_STEP;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Escape,
    /// Any other key (only matters after game over)
    Other,
}

impl Key {
    /// Paddle movement keys, which keep working under key repeat
    pub fn is_movement(&self) -> bool {
        matches!(self, Key::Left | Key::Right)
    }
}

/// Apply a single key press
///
/// After game over the first key press arms a reset and the second one
/// performs it; Escape resets straight away when pausing is enabled. While
/// paused only Escape is honoured.
pub fn on_key(state: &mut GameState, key: Key) -> Option<GameEvent> {
    let escape = key == Key::Escape && state.pause_enabled;

    match state.phase {
        GamePhase::GameOver => {
            if escape || state.reset_requested {
                state.reset();
                Some(GameEvent::Reset)
            } else {
                state.reset_requested = true;
                Some(GameEvent::ResetArmed)
            }
        }
        GamePhase::Paused => {
            if escape {
                state.phase = GamePhase::Running;
                Some(GameEvent::Resumed)
            } else {
                None
            }
        }
        GamePhase::Running => {
            state.reset_requested = false;
            match key {
                _ if escape => {
                    state.phase = GamePhase::Paused;
                    Some(GameEvent::Paused)
                }
                Key::Left => {
                    state.paddle.shift(-PADDLE_STEP, &state.arena);
                    None
                }
                Key::Right => {
                    state.paddle.shift(PADDLE_STEP, &state.arena);
                    None
                }
                Key::Escape | Key::Other => None,
            }
        }
    }
}
