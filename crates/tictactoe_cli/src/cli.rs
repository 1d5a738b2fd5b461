//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::Position;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Optional TOML file with board symbols
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one position per line
    Play,

    /// Replay a sequence of moves and print every notification
    Replay {
        /// Positions, as labels (top-left) or indices (0-8)
        #[arg(required = true)]
        moves: Vec<Position>,

        /// Print notifications as JSON lines
        #[arg(long)]
        json: bool,
    },
}
