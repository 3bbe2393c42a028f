use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use rand::Rng;
use tracing::{info, warn};

use crate::error::ConfigError;
use crate::game::Piece;

/// Longest pause the UI may take before the computer's move is shown.
pub const MAX_THINK_DELAY_MS: u64 = 10_000;

/// Which side opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    Human,
    Computer,
    #[default]
    Random,
}

impl FirstPlayer {
    /// The side to start a game with, drawing a coin for `Random`.
    pub fn resolve<R: Rng>(self, rng: &mut R) -> Piece {
        match self {
            FirstPlayer::Human => Piece::Player,
            FirstPlayer::Computer => Piece::Computer,
            FirstPlayer::Random => {
                if rng.random_bool(0.5) {
                    Piece::Player
                } else {
                    Piece::Computer
                }
            }
        }
    }
}

impl FromStr for FirstPlayer {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(FirstPlayer::Human),
            "computer" => Ok(FirstPlayer::Computer),
            "random" => Ok(FirstPlayer::Random),
            other => Err(ConfigError::Validation(format!(
                "unknown first player '{other}' (expected 'human', 'computer', or 'random')"
            ))),
        }
    }
}

/// Game setup.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_player: FirstPlayer,
    /// Seed for the first-player draw; drawn from the OS when absent.
    pub seed: Option<u64>,
}

/// Terminal UI behaviour.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Pause after the "thinking" frame before the computer's move lands.
    pub think_delay_ms: u64,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.think_delay_ms > MAX_THINK_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "ui.think_delay_ms must be <= {MAX_THINK_DELAY_MS}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }

    /// Write the default configuration to `path` as a starting point for
    /// editing. Never overwrites an existing file.
    pub fn write_default(path: &Path) -> Result<(), ConfigError> {
        let content = Self::default_toml()?;
        let write = || -> std::io::Result<()> {
            let mut file = std::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path)?;
            file.write_all(content.as_bytes())
        };
        write().map_err(|e| ConfigError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!(path = %path.display(), "wrote default config");
        Ok(())
    }
}
