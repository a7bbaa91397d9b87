//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Integer positions, fixed-interval ticks
//! - Key presses and ticks both mutate `GameState` through `&mut`

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use input::{Key, on_key};
pub use state::{Arena, Ball, BrickGrid, GameEvent, GamePhase, GameState, Paddle};
pub use tick::tick;
