//! Noughts - command-line tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::cli::{Cli, Command};
use noughts::{Console, GameConfig, Outcome, play_session, suggest};
use noughts_core::Mark;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they stay out of the board display
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Parsed command line");

    match cli.command {
        Command::Play {
            config,
            x_name,
            x_kind,
            o_name,
            o_kind,
            difficulty,
            seed,
            think_ms,
        } => {
            let mut config = match config {
                Some(path) => GameConfig::from_file(&path)
                    .with_context(|| format!("Loading {}", path.display()))?,
                None => GameConfig::default(),
            }
            .with_difficulty(difficulty)
            .with_seed(seed)
            .with_think_delay_ms(think_ms);
            config.player_mut(Mark::X).merge(x_name, x_kind);
            config.player_mut(Mark::O).merge(o_name, o_kind);

            let outcome = play_session(&config, Console::stdio()).await?;
            if outcome == Outcome::Quit {
                info!("Session ended without a result");
            }
            Ok(())
        }
        Command::Suggest { moves } => {
            println!("{}", suggest(&moves)?);
            Ok(())
        }
    }
}
