//! Match configuration loaded from TOML.

use crate::error::ConfigError;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Names the two players start a session with.
///
/// ```toml
/// player1_name = "Ada"
/// player2_name = "Grace"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
pub struct MatchConfig {
    /// Name of the X player.
    #[serde(default = "default_player1_name")]
    player1_name: String,

    /// Name of the O player.
    #[serde(default = "default_player2_name")]
    player2_name: String,
}

#[instrument]
fn default_player1_name() -> String {
    "Player 1".to_string()
}

#[instrument]
fn default_player2_name() -> String {
    "Player 2".to_string()
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player1_name: default_player1_name(),
            player2_name: default_player2_name(),
        }
    }
}

impl MatchConfig {
    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        debug!(player1 = %config.player1_name, player2 = %config.player2_name, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Rejects blank player names.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player1_name.trim().is_empty() {
            return Err(ConfigError::new("player1_name must not be blank"));
        }
        if self.player2_name.trim().is_empty() {
            return Err(ConfigError::new("player2_name must not be blank"));
        }
        Ok(())
    }
}
