//! Command-line interface for numguess.

use clap::Parser;
use std::path::PathBuf;

/// Numguess - guess the secret number
#[derive(Parser, Debug)]
#[command(name = "numguess")]
#[command(about = "Number-guessing game on the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file holding the guessing range
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Smallest secret number (overrides the config file)
    #[arg(long)]
    pub min: Option<i64>,

    /// Largest secret number (overrides the config file)
    #[arg(long)]
    pub max: Option<i64>,
}
