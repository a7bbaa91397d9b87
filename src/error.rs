//! Crate error type
//!
//! Every failure here is a host-environment problem. Nothing is retried; the
//! binary logs the error and exits.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("brick grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("brick grid {rows}x{cols} is too large (at most {max_rows}x{max_cols})")]
    GridTooLarge {
        rows: usize,
        cols: usize,
        max_rows: usize,
        max_cols: usize,
    },

    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,

    #[error("invalid settings JSON: {0}")]
    SettingsJson(#[from] serde_json::Error),

    #[error("unknown layout preset `{0}`")]
    UnknownLayout(String),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create GPU surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported {0}")]
    SurfaceUnsupported(&'static str),

    #[error("GPU ran out of memory")]
    OutOfMemory,
}
