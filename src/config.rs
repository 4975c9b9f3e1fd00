//! Controller configuration.
//!
//! Use the builder methods to customize, or [`ControllerConfig::from_env`]
//! to read the `PANELKIT_*` variables.
//!
//! # Example
//!
//! ```
//! use panelkit::config::ControllerConfig;
//! use panelkit::state::PanelSpec;
//! use std::time::Duration;
//!
//! let config = ControllerConfig::default()
//!     .with_toast_duration(Duration::from_millis(1500))
//!     .with_panel(PanelSpec::new("filters"));
//! assert_eq!(config.panels.len(), 3);
//! ```

use std::time::Duration;

use crate::error::ConfigError;
use crate::state::{PanelSpec, DEFAULT_TOAST_DURATION};

/// Default toast duration in milliseconds.
pub const ENV_TOAST_MS: &str = "PANELKIT_TOAST_MS";
/// Panel list, `id[:class[:transient]]` entries separated by commas.
pub const ENV_PANELS: &str = "PANELKIT_PANELS";
/// `tracing` filter directive for the log file.
pub const ENV_LOG: &str = "PANELKIT_LOG";

pub const DEFAULT_LOG_FILTER: &str = "panelkit=info";

#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Duration for toasts shown without an explicit one (default: 3s)
    pub toast_duration: Duration,
    /// Panels registered at startup, in order
    pub panels: Vec<PanelSpec>,
    /// Log filter directive (default: `panelkit=info`)
    pub log_filter: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            toast_duration: DEFAULT_TOAST_DURATION,
            panels: vec![
                PanelSpec::new("sidebar"),
                PanelSpec::new("menu")
                    .with_active_class("active")
                    .with_dismiss_on_outside_click(true),
            ],
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ControllerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    /// Append one panel to the startup list.
    pub fn with_panel(mut self, spec: PanelSpec) -> Self {
        self.panels.push(spec);
        self
    }

    /// Replace the startup panel list.
    pub fn with_panels(mut self, panels: Vec<PanelSpec>) -> Self {
        self.panels = panels;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Create config from the `PANELKIT_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_TOAST_MS) {
            config.toast_duration = parse_duration_ms(ENV_TOAST_MS, &value)?;
        }
        if let Some(value) = lookup(ENV_PANELS) {
            config.panels = parse_panel_list(ENV_PANELS, &value)?;
        }
        if let Some(value) = lookup(ENV_LOG) {
            if !value.trim().is_empty() {
                config.log_filter = value;
            }
        }

        Ok(config)
    }
}

fn parse_duration_ms(var: &'static str, value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidDuration {
            var,
            value: value.to_string(),
        })
}

/// Parse `sidebar,menu:active:transient` style panel lists.
fn parse_panel_list(var: &'static str, value: &str) -> Result<Vec<PanelSpec>, ConfigError> {
    let invalid = || ConfigError::InvalidPanelList {
        var,
        value: value.to_string(),
    };

    value
        .split(',')
        .map(|entry| {
            let mut parts = entry.trim().split(':').map(str::trim);
            let id = parts.next().filter(|id| !id.is_empty()).ok_or_else(invalid)?;
            let mut spec = PanelSpec::new(id);
            if let Some(class) = parts.next().filter(|c| !c.is_empty()) {
                spec = spec.with_active_class(class);
            }
            if parts.next() == Some("transient") {
                spec = spec.with_dismiss_on_outside_click(true);
            }
            Ok(spec)
        })
        .collect()
}
