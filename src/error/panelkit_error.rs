//! Unified error type for panelkit.

use thiserror::Error;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::store::StoreError;

/// Unified error type used at the host boundary.
#[derive(Debug, Error)]
pub enum PanelkitError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PanelkitError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            PanelkitError::Store(_) => ErrorCategory::Client,
            PanelkitError::Config(_) => ErrorCategory::Configuration,
            PanelkitError::Io(_) => ErrorCategory::System,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            PanelkitError::Store(err) => err.error_code(),
            PanelkitError::Config(err) => err.error_code(),
            PanelkitError::Io(_) => "E_SYS_IO",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            PanelkitError::Store(err) => err.user_message(),
            PanelkitError::Config(err) => err.to_string(),
            PanelkitError::Io(err) => format!("A system error occurred: {}", err),
        }
    }
}

/// Type alias for Results using PanelkitError.
pub type PanelkitResult<T> = Result<T, PanelkitError>;
