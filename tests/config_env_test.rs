// Integration tests for reading configuration from PANELKIT_* variables
//
// These tests mutate the process environment, so they run serially.

use std::time::Duration;

use panelkit::config::{ControllerConfig, ENV_LOG, ENV_PANELS, ENV_TOAST_MS};
use panelkit::controller::Controller;
use panelkit::error::ConfigError;
use serial_test::serial;

fn clear_env() {
    std::env::remove_var(ENV_TOAST_MS);
    std::env::remove_var(ENV_PANELS);
    std::env::remove_var(ENV_LOG);
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();

    let config = ControllerConfig::from_env().unwrap();

    assert_eq!(config.toast_duration, Duration::from_millis(3000));
    assert_eq!(config.log_filter, "panelkit=info");
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    std::env::set_var(ENV_TOAST_MS, "1200");
    std::env::set_var(ENV_PANELS, "sidebar,filters:expanded:transient");
    std::env::set_var(ENV_LOG, "panelkit=debug");

    let config = ControllerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.toast_duration, Duration::from_millis(1200));
    assert_eq!(config.panels.len(), 2);
    assert_eq!(config.panels[1].active_class, "expanded");
    assert!(config.panels[1].dismiss_on_outside_click);
    assert_eq!(config.log_filter, "panelkit=debug");

    let controller = Controller::new(config).unwrap();
    assert!(controller.store().panel("filters").is_some());
    assert!(controller.store().panel("menu").is_none());
}

#[test]
#[serial]
fn test_from_env_rejects_bad_duration() {
    clear_env();
    std::env::set_var(ENV_TOAST_MS, "three seconds");

    let result = ControllerConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::InvalidDuration { .. })));
}

#[test]
#[serial]
fn test_from_env_rejects_empty_panel_id() {
    clear_env();
    std::env::set_var(ENV_PANELS, "sidebar,,menu");

    let result = ControllerConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::InvalidPanelList { .. })));
}
