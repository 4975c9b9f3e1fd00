//! Toast notice payload and its dismissal ticket.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

/// Toast duration used when the caller does not pick one.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Semantic kind of a toast, emitted as a class next to `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    /// Class name the styling layer selects on.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }

    /// Parse a kind name; anything unrecognised is treated as `Info`.
    pub fn parse(s: &str) -> ToastKind {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            "warning" => ToastKind::Warning,
            _ => ToastKind::Info,
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle for one scheduled auto-dismissal.
///
/// The ticket only hides the notice it was issued for: once a newer notice
/// is shown the generation no longer matches and expiring the ticket is a
/// no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTicket {
    pub generation: u64,
    pub deadline: Instant,
}

/// The single toast slot.
#[derive(Debug, Clone, Default)]
pub struct ToastNotice {
    is_visible: bool,
    message: String,
    kind: ToastKind,
    /// Always `None` while hidden
    auto_dismiss_at: Option<Instant>,
    generation: u64,
    shown_at: Option<DateTime<Utc>>,
}

impl ToastNotice {
    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    pub fn auto_dismiss_at(&self) -> Option<Instant> {
        self.auto_dismiss_at
    }

    /// Generation of the most recent `show`; zero before the first one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Wall-clock time the current notice was shown.
    pub fn shown_at(&self) -> Option<DateTime<Utc>> {
        self.shown_at
    }

    pub(crate) fn show(
        &mut self,
        message: String,
        kind: ToastKind,
        deadline: Instant,
    ) -> DismissTicket {
        self.generation += 1;
        self.is_visible = true;
        self.message = message;
        self.kind = kind;
        self.auto_dismiss_at = Some(deadline);
        self.shown_at = Some(Utc::now());
        DismissTicket {
            generation: self.generation,
            deadline,
        }
    }

    /// Hide the notice. Returns `false` if it was already hidden.
    pub(crate) fn hide(&mut self) -> bool {
        let was_visible = self.is_visible;
        self.is_visible = false;
        self.auto_dismiss_at = None;
        was_visible
    }
}
