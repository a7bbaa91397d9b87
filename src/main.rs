//! Brick Breaker entry point
//!
//! Loads settings, opens the window and runs the game loop. Any startup or
//! host failure is reported and ends the process.

use std::process::ExitCode;

use brick_breaker::{Result, Settings, platform};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brick Breaker starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Fatal: {err}");
            eprintln!("brick-breaker: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let settings = Settings::load()?;
    platform::run(&settings)
}
