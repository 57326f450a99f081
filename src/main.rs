//! Numguess - number-guessing game on the terminal.
//!
//! Composition root: wires the game program to the terminal interpreter
//! and the tokio runtime.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use numguess::cli::Cli;
use numguess::config::GameConfig;
use numguess::game::game;
use numguess::interpreters::Terminal;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries game output only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::resolve(cli.config.as_deref(), cli.min, cli.max)?;
    debug!(?config, "resolved configuration");

    let terminal = Terminal::stdio();
    info!("starting game session");
    game(&terminal, config).await?;
    info!("game session finished");

    Ok(())
}
