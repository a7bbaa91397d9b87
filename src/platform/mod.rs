//! Platform layer
//!
//! Native desktop host for the simulation:
//! - Window and event loop (winit)
//! - Keyboard mapping to logical keys
//! - Fixed-interval tick timer

pub mod app;
pub mod input;
pub mod timer;

pub use app::{App, run};
pub use input::map_key;
pub use timer::FixedTimer;
