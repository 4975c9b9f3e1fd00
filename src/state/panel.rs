//! Collapsible panel visibility.
//!
//! A panel is a region (sidebar, dropdown, navigation menu) that is either
//! open or closed. Panels are registered once with a [`PanelSpec`] and only
//! their open flag changes afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Class applied to an open panel unless registered with another one.
pub const DEFAULT_ACTIVE_CLASS: &str = "open";

/// Identifier of a registered panel.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PanelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Registration parameters for a panel.
///
/// # Example
///
/// ```
/// use panelkit::state::PanelSpec;
///
/// let dropdown = PanelSpec::new("user-menu")
///     .with_active_class("show")
///     .with_dismiss_on_outside_click(true);
/// assert_eq!(dropdown.active_class, "show");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSpec {
    pub id: PanelId,
    /// Class the binder emits while the panel is open
    pub active_class: String,
    /// Close this panel when the user clicks outside of it
    pub dismiss_on_outside_click: bool,
}

impl PanelSpec {
    pub fn new(id: impl Into<PanelId>) -> Self {
        Self {
            id: id.into(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            dismiss_on_outside_click: false,
        }
    }

    pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    pub fn with_dismiss_on_outside_click(mut self, dismiss: bool) -> Self {
        self.dismiss_on_outside_click = dismiss;
        self
    }
}

/// Two-state panel lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    pub fn toggled(self) -> Self {
        match self {
            PanelState::Closed => PanelState::Open,
            PanelState::Open => PanelState::Closed,
        }
    }
}

/// Live visibility of one registered panel.
#[derive(Debug, Clone)]
pub struct PanelVisibility {
    spec: PanelSpec,
    state: PanelState,
}

impl PanelVisibility {
    pub(crate) fn new(spec: PanelSpec) -> Self {
        Self {
            spec,
            state: PanelState::Closed,
        }
    }

    pub fn id(&self) -> &PanelId {
        &self.spec.id
    }

    pub fn spec(&self) -> &PanelSpec {
        &self.spec
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    pub(crate) fn set_open(&mut self, open: bool) {
        self.state = if open {
            PanelState::Open
        } else {
            PanelState::Closed
        };
    }

    pub(crate) fn toggle(&mut self) -> bool {
        self.state = self.state.toggled();
        self.is_open()
    }
}
