//! Intent controller
//!
//! The controller is the single writer of the [`VisibilityStore`]. It applies
//! [`Intent`]s in arrival order and turns every shown toast into a timer task
//! that sends its [`DismissTicket`] back once the deadline passes.
//!
//! Timers are never aborted. A newer toast simply makes the older ticket
//! stale, and the store ignores stale tickets when they arrive.
//!
//! # Example
//!
//! ```no_run
//! use panelkit::config::ControllerConfig;
//! use panelkit::controller::{Controller, Intent};
//! use panelkit::state::ToastKind;
//!
//! # async fn example() -> Result<(), panelkit::error::StoreError> {
//! let mut controller = Controller::new(ControllerConfig::default())?;
//! controller.apply(Intent::toast("Saved", ToastKind::Success))?;
//!
//! // Later, in the host loop:
//! let changed = controller.expire_next().await;
//! # Ok(())
//! # }
//! ```

mod intent;

pub use intent::Intent;

use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::binder::{self, ClassSet, Element, Snapshot};
use crate::config::ControllerConfig;
use crate::error::{PanelkitError, StoreResult};
use crate::state::{DismissTicket, PanelId, ToastKind, VisibilityStore};

pub struct Controller {
    store: VisibilityStore,
    config: ControllerConfig,
    /// Cloned into every timer task
    expiry_tx: mpsc::UnboundedSender<DismissTicket>,
    expiry_rx: mpsc::UnboundedReceiver<DismissTicket>,
}

impl Controller {
    /// Build a controller with the configured panels registered.
    pub fn new(config: ControllerConfig) -> StoreResult<Self> {
        let store = VisibilityStore::with_panels(config.panels.iter().cloned())?;
        let (expiry_tx, expiry_rx) = mpsc::unbounded_channel();
        Ok(Self {
            store,
            config,
            expiry_tx,
            expiry_rx,
        })
    }

    pub fn store(&self) -> &VisibilityStore {
        &self.store
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn classes_for(&self, element: &Element) -> ClassSet {
        binder::classes_for(&self.store, element)
    }

    pub fn snapshot(&self) -> Snapshot {
        binder::snapshot(&self.store)
    }

    /// Apply one intent.
    ///
    /// Returns the elements whose class set changed. Panel intents naming an
    /// unregistered id fail with `UnknownPanelId` and change nothing.
    pub fn apply(&mut self, intent: Intent) -> StoreResult<Vec<Element>> {
        tracing::debug!(intent = intent.name(), "applying intent");

        match intent {
            Intent::OpenPanel(id) => {
                let before = self.panel_classes(&id);
                self.store.open_panel(id.as_str())?;
                Ok(self.changed_panel(id, before))
            }
            Intent::ClosePanel(id) => {
                let before = self.panel_classes(&id);
                self.store.close_panel(id.as_str())?;
                Ok(self.changed_panel(id, before))
            }
            Intent::TogglePanel(id) => {
                self.store.toggle_panel(id.as_str())?;
                Ok(vec![Element::Panel(id)])
            }
            Intent::ShowToast {
                message,
                kind,
                duration,
            } => {
                let duration = duration.unwrap_or(self.config.toast_duration);
                let ticket = self.store.show_toast(message, kind, duration);
                self.schedule_expiry(ticket);
                // Always reported: a replacement with the same kind keeps
                // its classes but carries a new message.
                Ok(vec![Element::Toast])
            }
            Intent::DismissToast => Ok(toast_if(self.store.dismiss_toast())),
            Intent::Expire(ticket) => Ok(toast_if(self.store.expire_toast(ticket))),
            Intent::OutsideClick => Ok(self
                .store
                .close_transient_panels()
                .into_iter()
                .map(Element::Panel)
                .collect()),
        }
    }

    /// Apply an intent, surfacing a store error as an error toast.
    ///
    /// For hosts that have no caller to hand the error back to.
    pub fn apply_or_notify(&mut self, intent: Intent) -> Vec<Element> {
        match self.apply(intent) {
            Ok(changed) => changed,
            Err(err) => {
                let err = PanelkitError::from(err);
                let category = err.category();
                tracing::warn!(
                    code = err.error_code(),
                    %category,
                    hint = category.recovery_hint(),
                    "{}",
                    err
                );
                self.show_toast(err.user_message(), ToastKind::Error);
                vec![Element::Toast]
            }
        }
    }

    /// Show a toast for the configured default duration.
    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) -> DismissTicket {
        let ticket = self
            .store
            .show_toast(message, kind, self.config.toast_duration);
        self.schedule_expiry(ticket);
        ticket
    }

    /// Wait for the next timer to fire.
    ///
    /// Never resolves while no toast timer is pending.
    pub async fn next_expiry(&mut self) -> Option<DismissTicket> {
        self.expiry_rx.recv().await
    }

    /// Wait for the next timer and apply it.
    pub async fn expire_next(&mut self) -> Vec<Element> {
        match self.next_expiry().await {
            Some(ticket) => toast_if(self.store.expire_toast(ticket)),
            None => Vec::new(),
        }
    }

    /// Apply every timer that has already fired without waiting.
    pub fn drain_expired(&mut self) -> Vec<Element> {
        let mut hidden = false;
        while let Ok(ticket) = self.expiry_rx.try_recv() {
            hidden |= self.store.expire_toast(ticket);
        }
        toast_if(hidden)
    }

    /// Expire the toast by clock instead of by timer task.
    ///
    /// For hosts that poll on a fixed tick rather than awaiting
    /// [`next_expiry`](Self::next_expiry).
    pub fn tick(&mut self, now: Instant) -> Vec<Element> {
        toast_if(self.store.expire_due(now))
    }

    fn schedule_expiry(&self, ticket: DismissTicket) {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let tx = self.expiry_tx.clone();
                handle.spawn(async move {
                    tokio::time::sleep_until(ticket.deadline).await;
                    // The controller may be gone by now
                    let _ = tx.send(ticket);
                });
            }
            Err(_) => {
                tracing::warn!(
                    generation = ticket.generation,
                    "no tokio runtime; toast will only expire through tick()"
                );
            }
        }
    }

    fn panel_classes(&self, id: &PanelId) -> ClassSet {
        binder::classes_for_panel(&self.store, id.as_str())
    }

    fn changed_panel(&self, id: PanelId, before: ClassSet) -> Vec<Element> {
        if self.panel_classes(&id) == before {
            Vec::new()
        } else {
            vec![Element::Panel(id)]
        }
    }
}

fn toast_if(changed: bool) -> Vec<Element> {
    if changed {
        vec![Element::Toast]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use std::time::Duration;

    fn controller() -> Controller {
        Controller::new(ControllerConfig::default()).unwrap()
    }

    #[test]
    fn test_registers_configured_panels() {
        let controller = controller();
        assert!(controller.store().panel("sidebar").is_some());
        assert!(controller.store().panel("menu").is_some());
    }

    #[test]
    fn test_duplicate_config_panel_fails() {
        let config = ControllerConfig::default()
            .with_panel(crate::state::PanelSpec::new("sidebar"));
        assert!(matches!(
            Controller::new(config),
            Err(StoreError::DuplicatePanelId { .. })
        ));
    }

    #[test]
    fn test_open_reports_change_once() {
        let mut controller = controller();
        let id = PanelId::from("sidebar");

        let first = controller.apply(Intent::OpenPanel(id.clone())).unwrap();
        let second = controller.apply(Intent::OpenPanel(id.clone())).unwrap();

        assert_eq!(first, vec![Element::Panel(id.clone())]);
        assert!(second.is_empty());
        assert_eq!(
            controller.classes_for(&Element::Panel(id)),
            ClassSet::of(["open"])
        );
    }

    #[test]
    fn test_unknown_panel_is_reported() {
        let mut controller = controller();
        let err = controller
            .apply(Intent::TogglePanel(PanelId::from("drawer")))
            .unwrap_err();
        assert_eq!(err, StoreError::unknown("drawer"));
        assert!(controller.store().panel("drawer").is_none());
    }

    #[test]
    fn test_apply_or_notify_turns_error_into_toast() {
        let mut controller = controller();

        let changed = controller.apply_or_notify(Intent::TogglePanel("drawer".into()));

        assert_eq!(changed, vec![Element::Toast]);
        assert_eq!(controller.store().toast().kind(), ToastKind::Error);
        assert!(controller.store().toast().message().contains("drawer"));
        assert!(controller.store().panel("drawer").is_none());
    }

    #[test]
    fn test_apply_or_notify_passes_through_success() {
        let mut controller = controller();

        let changed = controller.apply_or_notify(Intent::OpenPanel("sidebar".into()));

        assert_eq!(changed, vec![Element::Panel("sidebar".into())]);
        assert!(!controller.store().toast().is_visible());
    }

    #[test]
    fn test_outside_click_closes_menu_only() {
        let mut controller = controller();
        controller.apply(Intent::OpenPanel("sidebar".into())).unwrap();
        controller.apply(Intent::OpenPanel("menu".into())).unwrap();

        let changed = controller.apply(Intent::OutsideClick).unwrap();

        assert_eq!(changed, vec![Element::Panel("menu".into())]);
        assert_eq!(controller.store().is_open("sidebar"), Ok(true));
    }

    #[test]
    fn test_tick_without_runtime_expires_toast() {
        let mut controller = controller();
        let ticket = controller.show_toast("Saved", ToastKind::Success);

        assert!(controller.tick(ticket.deadline - Duration::from_millis(1)).is_empty());
        assert_eq!(controller.tick(ticket.deadline), vec![Element::Toast]);
        assert!(controller.classes_for(&Element::Toast).is_empty());
    }

    #[test]
    fn test_unbounded_toast_duration_accepted() {
        let mut controller = controller();

        let changed = controller
            .apply(Intent::toast_for("Pinned", ToastKind::Info, Duration::MAX))
            .unwrap();

        assert_eq!(changed, vec![Element::Toast]);
        assert!(controller.tick(Instant::now()).is_empty());
        assert!(controller.store().toast().is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_duration_timer() {
        let mut controller = controller();
        let start = Instant::now();
        controller.apply(Intent::toast("Saved", ToastKind::Success)).unwrap();

        let changed = controller.expire_next().await;

        assert_eq!(changed, vec![Element::Toast]);
        assert!(start.elapsed() >= Duration::from_millis(3000));
        assert!(controller.classes_for(&Element::Toast).is_empty());
    }
}
