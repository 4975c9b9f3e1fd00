//! Presentation binder
//!
//! Pure projection from a borrowed [`VisibilityStore`] to the class set of
//! each UI element. The binder never mutates the store and never touches a
//! rendering surface; the host collaborator applies the sets it returns.
//!
//! | Element | Visible | Hidden |
//! |---------|---------|--------|
//! | Panel | `{active_class}` (default `open`) | `{}` |
//! | Toast | `{show, <kind>}` | `{}` |

mod class_set;

pub use class_set::ClassSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::{PanelId, VisibilityStore};

/// Class the toast carries while visible.
pub const TOAST_SHOW_CLASS: &str = "show";

/// A UI element the binder can project.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element {
    Panel(PanelId),
    Toast,
}

/// Class set for a panel; empty for closed or unregistered panels.
pub fn classes_for_panel(store: &VisibilityStore, id: &str) -> ClassSet {
    match store.panel(id) {
        Some(panel) if panel.is_open() => ClassSet::of([panel.spec().active_class.as_str()]),
        _ => ClassSet::new(),
    }
}

/// Class set for the toast: `show` plus its kind while visible.
pub fn classes_for_toast(store: &VisibilityStore) -> ClassSet {
    let toast = store.toast();
    if toast.is_visible() {
        ClassSet::of([TOAST_SHOW_CLASS, toast.kind().as_str()])
    } else {
        ClassSet::new()
    }
}

pub fn classes_for(store: &VisibilityStore, element: &Element) -> ClassSet {
    match element {
        Element::Panel(id) => classes_for_panel(store, id.as_str()),
        Element::Toast => classes_for_toast(store),
    }
}

/// Class sets of every element at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Registered panels in registration order
    pub panels: Vec<(PanelId, ClassSet)>,
    pub toast: ClassSet,
    /// Text of the visible notice, if any
    pub toast_message: Option<String>,
    /// When the visible notice was shown
    pub toast_shown_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    pub fn panel(&self, id: &str) -> Option<&ClassSet> {
        self.panels
            .iter()
            .find(|(panel_id, _)| panel_id.as_str() == id)
            .map(|(_, classes)| classes)
    }
}

pub fn snapshot(store: &VisibilityStore) -> Snapshot {
    let panels = store
        .panels()
        .map(|panel| {
            let id = panel.id().clone();
            let classes = classes_for_panel(store, id.as_str());
            (id, classes)
        })
        .collect();
    let toast = store.toast();

    Snapshot {
        panels,
        toast: classes_for_toast(store),
        toast_message: toast.is_visible().then(|| toast.message().to_string()),
        toast_shown_at: toast.shown_at().filter(|_| toast.is_visible()),
    }
}
