//! Configuration errors.

use thiserror::Error;

/// Errors produced while reading [`ControllerConfig`](crate::config::ControllerConfig)
/// from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got '{value}'")]
    InvalidDuration { var: &'static str, value: String },

    #[error("{var} contains an empty panel id in '{value}'")]
    InvalidPanelList { var: &'static str, value: String },
}

impl ConfigError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidDuration { .. } => "E_CONFIG_DURATION",
            ConfigError::InvalidPanelList { .. } => "E_CONFIG_PANELS",
        }
    }
}
