//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_status` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use ip_status::config::Config;
use ip_status::initialization::init_logger_with;
use ip_status::server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present (PORT, DEFAULT_MC_SERVER)
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = server::serve(config).await {
        eprintln!("ip_status error: {e:#}");
        process::exit(1);
    }
    Ok(())
}
