//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `iss_tracker` library that handles
//! command-line argument parsing, logger initialization, and user-facing
//! error reporting. All core functionality lives in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use iss_tracker::initialization::init_logger_with;
use iss_tracker::{run_tracker, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = run_tracker(config).await {
        eprintln!("iss_tracker error: {e:#}");
        process::exit(1);
    }
    Ok(())
}
