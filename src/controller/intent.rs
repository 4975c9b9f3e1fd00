//! Intents issued by the host.

use std::time::Duration;

use crate::state::{DismissTicket, PanelId, ToastKind};

/// A discrete request to change visibility state.
///
/// Intents are applied strictly in the order they are issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    OpenPanel(PanelId),
    ClosePanel(PanelId),
    TogglePanel(PanelId),
    /// Show a notice; `None` duration uses the configured default
    ShowToast {
        message: String,
        kind: ToastKind,
        duration: Option<Duration>,
    },
    DismissToast,
    /// Delivered by the auto-dismiss timer
    Expire(DismissTicket),
    /// The user clicked outside every open transient panel
    OutsideClick,
}

impl Intent {
    pub fn toast(message: impl Into<String>, kind: ToastKind) -> Self {
        Intent::ShowToast {
            message: message.into(),
            kind,
            duration: None,
        }
    }

    pub fn toast_for(message: impl Into<String>, kind: ToastKind, duration: Duration) -> Self {
        Intent::ShowToast {
            message: message.into(),
            kind,
            duration: Some(duration),
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::OpenPanel(_) => "open_panel",
            Intent::ClosePanel(_) => "close_panel",
            Intent::TogglePanel(_) => "toggle_panel",
            Intent::ShowToast { .. } => "show_toast",
            Intent::DismissToast => "dismiss_toast",
            Intent::Expire(_) => "expire",
            Intent::OutsideClick => "outside_click",
        }
    }
}
