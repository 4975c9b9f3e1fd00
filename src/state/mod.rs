//! Visibility state
//!
//! This module contains the only mutable UI state of the crate:
//! - PanelVisibility: open/closed flag per registered panel
//! - ToastNotice: the single toast slot with its generation token
//! - VisibilityStore: owner of both, enforcing the transitions

pub mod panel;
pub mod store;
pub mod toast;

pub use panel::{PanelId, PanelSpec, PanelState, PanelVisibility, DEFAULT_ACTIVE_CLASS};
pub use store::VisibilityStore;
pub use toast::{DismissTicket, ToastKind, ToastNotice, DEFAULT_TOAST_DURATION};
