//! Front-end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_minimax::{Mark, Player};
use tracing::{debug, info, instrument};

/// Presentation and logging settings, read from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Symbol drawn for the human's cells.
    #[serde(default = "default_human_symbol")]
    human_symbol: char,

    /// Symbol drawn for the engine's cells.
    #[serde(default = "default_automated_symbol")]
    automated_symbol: char,

    /// Log file used while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_human_symbol() -> char {
    'O'
}

fn default_automated_symbol() -> char {
    'X'
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_minimax.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_symbol: default_human_symbol(),
            automated_symbol: default_automated_symbol(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(human = %config.human_symbol, automated = %config.automated_symbol, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Symbol drawn for a cell, or `None` for an empty one.
    pub fn symbol(&self, mark: Mark) -> Option<char> {
        match mark.player()? {
            Player::Human => Some(self.human_symbol),
            Player::Automated => Some(self.automated_symbol),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.human_symbol == self.automated_symbol {
            return Err(ConfigError::new(format!(
                "Both players would be drawn as {:?}",
                self.human_symbol
            )));
        }
        for symbol in [self.human_symbol, self.automated_symbol] {
            if symbol.is_ascii_digit() || symbol.is_whitespace() {
                return Err(ConfigError::new(format!(
                    "Symbol {:?} would be mistaken for an empty cell",
                    symbol
                )));
            }
        }
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.symbol(Mark::Human), Some('O'));
        assert_eq!(config.symbol(Mark::Automated), Some('X'));
        assert_eq!(config.symbol(Mark::Empty), None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("human_symbol = \"@\"\n");
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.human_symbol(), '@');
        assert_eq!(*config.automated_symbol(), 'X');
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_identical_symbols_rejected() {
        let file = write_config("human_symbol = \"X\"\nautomated_symbol = \"X\"\n");
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Both players"));
    }

    #[test]
    fn test_digit_symbol_rejected() {
        let file = write_config("automated_symbol = \"7\"\n");
        assert!(GameConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_malformed_toml_reports_parse_error() {
        let file = write_config("human_symbol = \n");
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Config error: Failed to parse config"));
    }
}
