//! Application settings configuration.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use super::{ConfigError, Result};

/// How command entries are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned plain-text columns.
    #[default]
    Table,
    /// JSON document.
    Json,
    /// TOML document.
    Toml,
}

/// Application-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Output format used when `--format` is not given.
    pub output: OutputFormat,
    /// Log filter directives used when `RUST_LOG` is not set.
    pub log_filter: Option<String>,
}

impl Settings {
    /// Validate these settings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` if the log filter is empty or
    /// not a valid filter directive list.
    pub fn validate(&self) -> Result<()> {
        if let Some(filter) = &self.log_filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "log_filter cannot be empty".to_string(),
                ));
            }

            if let Err(e) = EnvFilter::try_new(filter) {
                return Err(ConfigError::ValidationError(format!(
                    "log_filter '{}' is invalid: {}",
                    filter, e
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.output, OutputFormat::Table);
        assert!(settings.log_filter.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_valid_log_filter() {
        let settings = Settings {
            log_filter: Some("rccmd=debug,warn".to_string()),
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_log_filter_rejected() {
        let settings = Settings {
            log_filter: Some("  ".to_string()),
            ..Settings::default()
        };

        let result = settings.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_invalid_log_filter_rejected() {
        let settings = Settings {
            log_filter: Some("rccmd=notalevel".to_string()),
            ..Settings::default()
        };

        let result = settings.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("is invalid"));
    }

    #[test]
    fn test_output_format_serialization() {
        let settings = Settings {
            output: OutputFormat::Json,
            log_filter: None,
        };

        let toml_str = toml::to_string(&settings).unwrap();
        assert!(toml_str.contains("output = \"json\""));

        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: Settings = toml::from_str("").unwrap();
        assert_eq!(parsed, Settings::default());
    }
}
