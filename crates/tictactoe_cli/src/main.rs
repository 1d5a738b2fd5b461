//! Tictactoe - terminal driver for the rules engine.

#![warn(missing_docs)]

mod cli;
mod config;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::DisplayConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = DisplayConfig::load(cli.config.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Play => {
            info!("Starting interactive game");
            session::run_interactive(std::io::stdin().lock(), &mut out, &config)
        }
        Command::Replay { moves, json } => {
            info!(moves = moves.len(), "Replaying moves");
            session::run_replay(&moves, json, &config, &mut out)
        }
    }
}
