//! The visibility state store.
//!
//! [`VisibilityStore`] owns every panel flag and the single toast slot. It is
//! the only mutable UI state in the crate: the controller writes to it, the
//! binder reads from it. There are no globals, so tests build as many
//! isolated stores as they need.

use std::time::Duration;
use tokio::time::Instant;

use super::panel::{PanelId, PanelSpec, PanelVisibility};
use super::toast::{DismissTicket, ToastKind, ToastNotice};
use crate::error::{StoreError, StoreResult};

/// Deadline offset used when `now + duration` does not fit in an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// Panel and toast visibility for one session.
#[derive(Debug, Clone, Default)]
pub struct VisibilityStore {
    /// Registration order is kept for rendering
    panels: Vec<PanelVisibility>,
    toast: ToastNotice,
}

impl VisibilityStore {
    /// Create an empty store with no registered panels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store and register every spec in order.
    pub fn with_panels<I>(specs: I) -> StoreResult<Self>
    where
        I: IntoIterator<Item = PanelSpec>,
    {
        let mut store = Self::new();
        for spec in specs {
            store.register_panel(spec)?;
        }
        Ok(store)
    }

    // ========================================================================
    // Panels
    // ========================================================================

    /// Register a panel in the `Closed` state.
    pub fn register_panel(&mut self, spec: PanelSpec) -> StoreResult<()> {
        if self.panel(spec.id.as_str()).is_some() {
            return Err(StoreError::DuplicatePanelId { id: spec.id });
        }
        tracing::debug!(panel = %spec.id, class = %spec.active_class, "panel registered");
        self.panels.push(PanelVisibility::new(spec));
        Ok(())
    }

    pub fn panel(&self, id: &str) -> Option<&PanelVisibility> {
        self.panels.iter().find(|p| p.id().as_str() == id)
    }

    /// Registered panels in registration order.
    pub fn panels(&self) -> impl Iterator<Item = &PanelVisibility> {
        self.panels.iter()
    }

    pub fn is_open(&self, id: &str) -> StoreResult<bool> {
        self.panel(id)
            .map(PanelVisibility::is_open)
            .ok_or_else(|| StoreError::unknown(id))
    }

    /// Open a panel. Opening an open panel is a no-op.
    pub fn open_panel(&mut self, id: &str) -> StoreResult<()> {
        let panel = self.panel_mut(id)?;
        if !panel.is_open() {
            panel.set_open(true);
            tracing::debug!(panel = id, "panel opened");
        }
        Ok(())
    }

    /// Close a panel. Closing a closed panel is a no-op.
    pub fn close_panel(&mut self, id: &str) -> StoreResult<()> {
        let panel = self.panel_mut(id)?;
        if panel.is_open() {
            panel.set_open(false);
            tracing::debug!(panel = id, "panel closed");
        }
        Ok(())
    }

    /// Flip a panel and return whether it is now open.
    pub fn toggle_panel(&mut self, id: &str) -> StoreResult<bool> {
        let open = self.panel_mut(id)?.toggle();
        tracing::debug!(panel = id, open, "panel toggled");
        Ok(open)
    }

    /// Close every open panel registered with `dismiss_on_outside_click`.
    ///
    /// Returns the ids that were actually closed.
    pub fn close_transient_panels(&mut self) -> Vec<PanelId> {
        let mut closed = Vec::new();
        for panel in &mut self.panels {
            if panel.spec().dismiss_on_outside_click && panel.is_open() {
                panel.set_open(false);
                closed.push(panel.id().clone());
            }
        }
        if !closed.is_empty() {
            tracing::debug!(count = closed.len(), "transient panels closed");
        }
        closed
    }

    fn panel_mut(&mut self, id: &str) -> StoreResult<&mut PanelVisibility> {
        self.panels
            .iter_mut()
            .find(|p| p.id().as_str() == id)
            .ok_or_else(|| StoreError::unknown(id))
    }

    // ========================================================================
    // Toast
    // ========================================================================

    pub fn toast(&self) -> &ToastNotice {
        &self.toast
    }

    /// Show a notice that dismisses itself after `duration`.
    ///
    /// Replaces whatever notice is current. The returned ticket is the only
    /// thing that can time this notice out.
    pub fn show_toast(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        duration: Duration,
    ) -> DismissTicket {
        self.show_toast_at(message, kind, duration, Instant::now())
    }

    /// Like [`show_toast`](Self::show_toast) with an explicit current time.
    pub fn show_toast_at(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        duration: Duration,
        now: Instant,
    ) -> DismissTicket {
        let deadline = now
            .checked_add(duration)
            .or_else(|| now.checked_add(FAR_FUTURE))
            .unwrap_or(now);
        let ticket = self.toast.show(message.into(), kind, deadline);
        tracing::debug!(
            generation = ticket.generation,
            %kind,
            duration_ms = duration.as_millis() as u64,
            "toast shown"
        );
        ticket
    }

    /// Hide the current notice. Safe to call at any time.
    ///
    /// Returns `true` if a visible notice was hidden.
    pub fn dismiss_toast(&mut self) -> bool {
        let hidden = self.toast.hide();
        if hidden {
            tracing::debug!(generation = self.toast.generation(), "toast dismissed");
        }
        hidden
    }

    /// Time out the notice `ticket` was issued for.
    ///
    /// Does nothing if a newer notice has been shown since or the notice is
    /// already hidden. Returns `true` if the notice was hidden.
    pub fn expire_toast(&mut self, ticket: DismissTicket) -> bool {
        if ticket.generation != self.toast.generation() {
            tracing::debug!(
                stale = ticket.generation,
                current = self.toast.generation(),
                "stale toast timer ignored"
            );
            return false;
        }
        let hidden = self.toast.hide();
        if hidden {
            tracing::debug!(generation = ticket.generation, "toast timed out");
        }
        hidden
    }

    /// Time out the current notice if its deadline is at or before `now`.
    pub fn expire_due(&mut self, now: Instant) -> bool {
        match self.toast.auto_dismiss_at() {
            Some(deadline) if deadline <= now => self.expire_toast(DismissTicket {
                generation: self.toast.generation(),
                deadline,
            }),
            _ => false,
        }
    }
}
