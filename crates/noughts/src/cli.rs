//! Command-line interface for noughts.

use crate::config::PlayerKind;
use clap::{Parser, Subcommand};
use noughts_core::Difficulty;

/// Noughts - tic-tac-toe with a perfect computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe for humans and computers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to a TOML session config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Name of the player using X
        #[arg(long)]
        x_name: Option<String>,

        /// Who plays X (human or computer)
        #[arg(long)]
        x_kind: Option<PlayerKind>,

        /// Name of the player using O
        #[arg(long)]
        o_name: Option<String>,

        /// Who plays O (human or computer)
        #[arg(long)]
        o_kind: Option<PlayerKind>,

        /// Computer strength (perfect or easy)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before each computer move, in milliseconds
        #[arg(long)]
        think_ms: Option<u64>,
    },

    /// Print the best move after a sequence of moves
    Suggest {
        /// Moves played so far, e.g. "0,0 1,1 0,1"
        #[arg(short, long, default_value = "")]
        moves: String,
    },
}
