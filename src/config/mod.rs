//! Configuration management for rccmd.
//!
//! This module handles loading and saving the user configuration file.
//! A missing file at the default location is not an error: the defaults
//! apply. A file named explicitly must exist.

mod settings;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub use settings::{OutputFormat, Settings};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "RCCMD_CONFIG";

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// The config directory could not be created.
    #[error("Failed to create configuration directory: {0}")]
    CreateDirError(io::Error),

    /// The config file could not be read.
    #[error("Failed to read configuration file: {0}")]
    ReadError(io::Error),

    /// The config file could not be written.
    #[error("Failed to write configuration file: {0}")]
    WriteError(io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The config could not be serialized.
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// A value failed validation.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// The on-disk configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Application settings.
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Get the config file path.
    ///
    /// `RCCMD_CONFIG` takes precedence over the platform config directory
    /// (`<config_dir>/rccmd/config.toml`).
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("rccmd").join("config.toml"))
    }

    /// Load the configuration from the default location.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load the configuration from `path`.
    ///
    /// Returns the default configuration if the file does not exist.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read, parsed, or validated.
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(path, &content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::ReadError(e)),
        }
    }

    /// Load the configuration from a path the user asked for explicitly.
    ///
    /// Unlike [`Config::load_from`], a missing file is an error.
    pub fn load_required(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.settings.validate()?;

        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.settings.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::CreateDirError)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(ConfigError::WriteError)?;

        info!(path = %path.display(), "Saved configuration");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_required_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let result = Config::load_required(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_load_required_reads_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\noutput = \"json\"\n").unwrap();

        let config = Config::load_required(&path).unwrap();
        assert_eq!(config.settings.output, OutputFormat::Json);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            settings: Settings {
                output: OutputFormat::Toml,
                log_filter: Some("rccmd=trace".to_string()),
            },
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\noutput = \"yaml\"\n").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_validation_error_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\nlog_filter = \"\"\n").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_save_rejects_invalid_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            settings: Settings {
                log_filter: Some(String::new()),
                ..Settings::default()
            },
        };

        assert!(config.save_to(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    #[serial]
    fn test_config_path_env_override() {
        std::env::set_var(CONFIG_PATH_ENV, "/tmp/rccmd-test/config.toml");
        let path = Config::config_path().unwrap();
        std::env::remove_var(CONFIG_PATH_ENV);

        assert_eq!(path, PathBuf::from("/tmp/rccmd-test/config.toml"));
    }

    #[test]
    #[serial]
    fn test_config_path_default_location() {
        std::env::remove_var(CONFIG_PATH_ENV);
        match dirs::config_dir() {
            Some(_) => {
                let path = Config::config_path().unwrap();
                assert!(path.ends_with("rccmd/config.toml"));
            }
            None => {
                assert!(matches!(
                    Config::config_path(),
                    Err(ConfigError::NoConfigDir)
                ));
            }
        }
    }
}
