//! Contact Assistant - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr so they
//! never mix with command replies.

use anyhow::Result;
use contact_assistant::bot;
use contact_assistant::{AssistantBot, Config};
use std::io;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // A bad setting never blocks the session; defaults apply instead
    let (config, config_error) = Config::from_env_or_default();

    // RUST_LOG wins; otherwise the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match config_error {
        None => info!("Configuration loaded successfully"),
        Some(e) => warn!("Ignoring invalid configuration, using defaults: {}", e),
    }

    info!(
        "Birthday reminder window: {} days",
        config.birthday_window_days
    );

    let mut assistant = AssistantBot::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    bot::run(&mut assistant, stdin.lock(), &mut stdout)?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
