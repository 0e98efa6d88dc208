//! Session configuration loaded from TOML and command-line flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::{Difficulty, Mark};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who controls a mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum PlayerKind {
    /// Moves typed at the terminal.
    #[default]
    #[strum(to_string = "human", serialize = "h")]
    Human,
    /// Moves chosen by the search player.
    #[strum(to_string = "computer", serialize = "c")]
    Computer,
}

/// Settings for one side. Unset fields are asked for interactively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    #[serde(default)]
    name: Option<String>,

    /// Human or computer.
    #[serde(default)]
    kind: Option<PlayerKind>,
}

impl PlayerConfig {
    /// Creates a fully specified player config.
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: Some(name.into()),
            kind: Some(kind),
        }
    }

    /// Overwrites each field whose replacement is `Some`.
    pub fn merge(&mut self, name: Option<String>, kind: Option<PlayerKind>) {
        if name.is_some() {
            self.name = name;
        }
        if kind.is_some() {
            self.kind = kind;
        }
    }
}

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player using X (moves first).
    #[serde(default)]
    player_x: PlayerConfig,

    /// Player using O.
    #[serde(default)]
    player_o: PlayerConfig,

    /// Strength of computer players.
    #[serde(default)]
    difficulty: Difficulty,

    /// Pause before each computer move.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Seed for the computer's random choices; entropy when unset.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_think_delay_ms() -> u64 {
    300
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_x: PlayerConfig::default(),
            player_o: PlayerConfig::default(),
            difficulty: Difficulty::default(),
            think_delay_ms: default_think_delay_ms(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Config for `mark`.
    pub fn player(&self, mark: Mark) -> &PlayerConfig {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }

    /// Mutable config for `mark`.
    pub fn player_mut(&mut self, mark: Mark) -> &mut PlayerConfig {
        match mark {
            Mark::X => &mut self.player_x,
            Mark::O => &mut self.player_o,
        }
    }

    /// Overrides difficulty when `Some`.
    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        self
    }

    /// Overrides the seed when `Some`.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Overrides the thinking delay when `Some`.
    pub fn with_think_delay_ms(mut self, think_delay_ms: Option<u64>) -> Self {
        if let Some(ms) = think_delay_ms {
            self.think_delay_ms = ms;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
