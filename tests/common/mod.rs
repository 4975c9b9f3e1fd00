//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let mut controller = TestControllerBuilder::new()
//!     .with_panel(PanelSpec::new("filters"))
//!     .build();
//! ```

#![allow(dead_code)]

use std::time::Duration;

use panelkit::config::ControllerConfig;
use panelkit::controller::Controller;
use panelkit::state::{PanelSpec, VisibilityStore};

/// A store with just the sidebar registered.
pub fn sidebar_store() -> VisibilityStore {
    VisibilityStore::with_panels([PanelSpec::new("sidebar")]).unwrap()
}

/// Builder for controllers with a known panel set.
///
/// Starts from the sidebar alone rather than the default config so tests
/// do not depend on the default panel list.
pub struct TestControllerBuilder {
    panels: Vec<PanelSpec>,
    toast_duration: Duration,
}

impl Default for TestControllerBuilder {
    fn default() -> Self {
        Self {
            panels: vec![PanelSpec::new("sidebar")],
            toast_duration: Duration::from_millis(3000),
        }
    }
}

impl TestControllerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_panel(mut self, spec: PanelSpec) -> Self {
        self.panels.push(spec);
        self
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    pub fn build(self) -> Controller {
        let config = ControllerConfig::default()
            .with_panels(self.panels)
            .with_toast_duration(self.toast_duration);
        Controller::new(config).unwrap()
    }
}

pub fn test_controller() -> Controller {
    TestControllerBuilder::new().build()
}
