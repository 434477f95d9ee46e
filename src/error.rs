//! Centralized error types for rccmd.
//!
//! This module provides a unified error hierarchy for the application with
//! user-friendly error messages. All error types use `thiserror`.

use thiserror::Error;

use crate::commands::CommandError;
use crate::config::ConfigError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Command decoding errors.
    #[error("{0}")]
    Command(#[from] CommandError),

    /// Generic errors with a message.
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Create a generic error.
    pub fn other(msg: impl Into<String>) -> Self {
        AppError::Other(msg.into())
    }

    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::CreateDirError(_) => {
                    "Could not create configuration directory. Check file permissions.".to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file is readable."
                        .to_string()
                }
                ConfigError::WriteError(_) => {
                    "Could not save configuration. Please check file permissions.".to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::SerializeError(_) => {
                    "Could not save configuration. Internal error.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
            },
            AppError::Command(e) => match e {
                CommandError::UnknownCommand(code) => {
                    format!("{} is not a known command code.", code)
                }
                CommandError::UnknownName(name) => {
                    format!("'{}' is not a known command.", name)
                }
            },
            AppError::Other(msg) => msg.clone(),
        }
    }

    /// Get a suggested action for the user.
    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Config(ConfigError::ParseError(_))
            | AppError::Config(ConfigError::ValidationError(_)) => {
                Some("Fix or remove the configuration file, or point RCCMD_CONFIG elsewhere.")
            }
            AppError::Command(_) => Some("Run 'rccmd list' to see the known commands."),
            _ => None,
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
