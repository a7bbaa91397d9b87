//! Brick Breaker - a minimal brick-breaker arcade game
//!
//! Core modules:
//! - `sim`: Game state, fixed-interval tick, key handling and collisions
//! - `renderer`: Drawing surface abstraction and the WebGPU pipeline behind it
//! - `platform`: Native window, keyboard mapping and tick timer
//! - `settings`: Layout presets and runtime configuration

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::{Layout, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation interval in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 5;
    /// Maximum ticks run per frame to prevent spiral of death
    pub const MAX_TICKS_PER_FRAME: u32 = 16;

    /// Ball defaults (the ball is drawn in a square box of this edge)
    pub const BALL_SIZE: i32 = 20;
    pub const BALL_START_X: i32 = 100;
    pub const BALL_START_Y: i32 = 100;
    pub const BALL_START_VX: i32 = 2;
    pub const BALL_START_VY: i32 = 2;

    /// Paddle defaults - the paddle only moves horizontally
    pub const PADDLE_START_X: i32 = 150;
    pub const PADDLE_Y: i32 = 500;
    pub const PADDLE_WIDTH: i32 = 60;
    pub const PADDLE_HEIGHT: i32 = 10;
    /// Horizontal distance moved per Left/Right key press
    pub const PADDLE_STEP: i32 = 40;

    /// Ball y at or beyond which the ball is lost
    pub const LOSS_LINE_Y: i32 = 600;

    /// Brick cell dimensions
    pub const BRICK_WIDTH: i32 = 50;
    pub const BRICK_HEIGHT: i32 = 20;
    /// Grid limits: rows stop above the paddle, columns at a wide monitor
    pub const MAX_BRICK_ROWS: usize = (PADDLE_Y / BRICK_HEIGHT) as usize;
    pub const MAX_BRICK_COLS: usize = 256;

    /// Arena used until the window reports its real size
    pub const DEFAULT_ARENA_WIDTH: u32 = 1280;
    pub const DEFAULT_ARENA_HEIGHT: u32 = 720;
}
