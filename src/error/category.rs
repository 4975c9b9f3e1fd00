//! Error category classification.
//!
//! Categories let the host decide how to surface a failure without matching
//! on every concrete error variant.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Programming errors (panel referenced before registration).
    /// Not retryable.
    Client,

    /// Invalid environment or builder settings.
    /// Not retryable until the configuration is corrected.
    Configuration,

    /// OS errors (log directory, terminal I/O).
    System,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Client => "client",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::System => "system",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Client => {
                "This may be a bug. Please report this issue if it persists"
            }
            ErrorCategory::Configuration => "Check the PANELKIT_* environment variables",
            ErrorCategory::System => "Check file permissions and terminal settings",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_as_str() {
        assert_eq!(ErrorCategory::Client.as_str(), "client");
        assert_eq!(ErrorCategory::Configuration.as_str(), "configuration");
        assert_eq!(ErrorCategory::System.as_str(), "system");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", ErrorCategory::Client), "client");
    }

    #[test]
    fn test_category_recovery_hint() {
        assert!(ErrorCategory::Client.recovery_hint().contains("bug"));
        assert!(ErrorCategory::Configuration.recovery_hint().contains("PANELKIT_"));
    }
}
