//! rolo - Main entry point
//!
//! This is the interactive shell binary for the rolo address book. It wires
//! logging, configuration, and an empty book together and hands control to
//! the read-eval-print loop until the user types `close` or `exit`.

use anyhow::Result;
use rolo::{shell, AddressBook, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout clean for command replies)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting rolo with a {}-day birthday window",
        config.birthday_window_days
    );

    // One in-memory book per session, dropped at exit
    let mut book = AddressBook::new();

    let stdin = io::stdin();
    if let Err(e) = shell::run(&mut book, &config, stdin.lock(), io::stdout()) {
        error!("Shell I/O failed: {}", e);
        return Err(e.into());
    }

    info!("rolo session ended");
    Ok(())
}
