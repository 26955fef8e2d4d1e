//! Main application entry point (API server binary).
//!
//! This is a thin wrapper around the `webinspect` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All audit functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use webinspect::app::init_logger;
use webinspect::fetch::Fetcher;
use webinspect::signal::ThreadRngSignals;
use webinspect::{start_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger(config.log_level.clone().into());

    let fetcher = Fetcher::new().context("Failed to build HTTP client")?;
    let signals = Arc::new(ThreadRngSignals);

    if let Err(e) = start_server(&config.bind, config.port, fetcher, signals).await {
        eprintln!("webinspect error: {e:#}");
        process::exit(1);
    }

    Ok(())
}
