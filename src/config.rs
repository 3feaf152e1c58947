//! Match configuration loaded from TOML.

use crate::players::{FirstFreePlayer, HumanPlayer, MinimaxPlayer, Player, PlayerKind};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default config file looked up by `play`.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_minimax.toml";

/// One seat at the board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Who plays this seat.
    kind: PlayerKind,

    /// Display name; defaults per kind.
    #[serde(default)]
    name: Option<String>,
}

impl SeatConfig {
    /// Creates a seat of the given kind with its default name.
    pub fn new(kind: PlayerKind) -> Self {
        Self { kind, name: None }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name shown for this seat.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .unwrap_or_else(|| self.kind.default_name())
    }

    /// Builds the player for this seat. Humans use stdin and stdout.
    #[instrument(skip(self), fields(kind = %self.kind))]
    pub fn build(&self) -> Box<dyn Player> {
        let name = self.display_name().to_string();
        match self.kind {
            PlayerKind::Human => Box::new(HumanPlayer::new(
                name,
                std::io::stdin().lock(),
                std::io::stdout(),
            )),
            PlayerKind::Minimax => Box::new(MinimaxPlayer::new(name)),
            PlayerKind::FirstFree => Box::new(FirstFreePlayer::new(name)),
        }
    }
}

/// Who plays X and who plays O.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seat that moves first.
    #[serde(default = "default_x")]
    x: SeatConfig,

    /// Seat that moves second.
    #[serde(default = "default_o")]
    o: SeatConfig,
}

fn default_x() -> SeatConfig {
    SeatConfig::new(PlayerKind::Human)
}

fn default_o() -> SeatConfig {
    SeatConfig::new(PlayerKind::Minimax)
}

impl MatchConfig {
    /// Creates a configuration from two seats.
    pub fn new(x: SeatConfig, o: SeatConfig) -> Self {
        Self { x, o }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(x = %config.x.kind, o = %config.o.kind, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces the seat kinds given on the command line, keeping configured names
    /// only when the kind is unchanged.
    pub fn override_kinds(mut self, x: Option<PlayerKind>, o: Option<PlayerKind>) -> Self {
        for (seat, kind) in [(&mut self.x, x), (&mut self.o, o)] {
            if let Some(kind) = kind {
                if kind != seat.kind {
                    *seat = SeatConfig::new(kind);
                }
            }
        }
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(default_x(), default_o())
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
