//! Noughts - terminal tic-tac-toe
//!
//! Thin interactive shell around [`noughts_core`]: reads player setup and
//! moves from the terminal, asks the computer player for its moves, and
//! prints the board and the result.
//!
//! # Architecture
//!
//! - **Config**: TOML session settings merged with command-line flags
//! - **Setup**: prompts for any player names and types still missing
//! - **Players**: human (typed moves) and computer (search) behind one trait
//! - **Orchestrator**: turn loop, rejected-move handling, result reporting

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod input;
pub mod orchestrator;
pub mod players;
pub mod session;
pub mod setup;

pub use config::{ConfigError, GameConfig, PlayerConfig, PlayerKind};
pub use console::Console;
pub use orchestrator::{Orchestrator, Outcome};
pub use session::{play_session, suggest};
