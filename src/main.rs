//! Contact Book - Main entry point
//!
//! Sets up logging and configuration, then hands stdin/stdout to the
//! interactive menu loop.

use anyhow::{Context, Result};
use contact_book::{Config, ContactDirectory, Menu, TracingLog};
use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env().context("failed to load configuration")?;

    // Initialize logging (stderr or a log file, never stdout - the menu owns stdout)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let writer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            BoxMakeWriter::new(Arc::new(file))
        }
        None => BoxMakeWriter::new(io::stderr),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .init();

    info!("Contact book starting");

    let directory = ContactDirectory::new(Arc::new(TracingLog));

    let stdin = io::stdin();
    let mut menu = Menu::new(directory, stdin.lock(), io::stdout());
    menu.run().context("menu loop failed")?;

    info!(
        "Contact book shutdown complete ({} contact(s) discarded)",
        menu.directory().count()
    );
    Ok(())
}
