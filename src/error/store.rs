//! Errors raised by the visibility store.

use thiserror::Error;

use crate::state::PanelId;

/// Store operation errors.
///
/// Both variants are programmer errors: they are returned synchronously to
/// the caller that issued the intent and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A panel operation named an id that was never registered.
    #[error("Unknown panel id '{id}'")]
    UnknownPanelId { id: PanelId },

    /// A panel id was registered twice.
    #[error("Panel id '{id}' is already registered")]
    DuplicatePanelId { id: PanelId },
}

impl StoreError {
    pub fn unknown(id: impl Into<PanelId>) -> Self {
        StoreError::UnknownPanelId { id: id.into() }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::UnknownPanelId { .. } => "E_STORE_UNKNOWN_PANEL",
            StoreError::DuplicatePanelId { .. } => "E_STORE_DUPLICATE_PANEL",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::UnknownPanelId { id } => {
                format!("The panel '{}' does not exist on this page.", id)
            }
            StoreError::DuplicatePanelId { id } => {
                format!("The panel '{}' was set up twice.", id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_panel_display() {
        let err = StoreError::unknown("drawer");
        assert_eq!(err.to_string(), "Unknown panel id 'drawer'");
        assert_eq!(err.error_code(), "E_STORE_UNKNOWN_PANEL");
        assert!(err.user_message().contains("drawer"));
    }

    #[test]
    fn test_duplicate_panel_code() {
        let err = StoreError::DuplicatePanelId {
            id: PanelId::from("sidebar"),
        };
        assert_eq!(err.error_code(), "E_STORE_DUPLICATE_PANEL");
        assert!(err.to_string().contains("already registered"));
    }
}
