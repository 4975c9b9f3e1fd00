// Integration tests for toast auto-dismiss timers
//
// All tests run with a paused tokio clock, so time only moves when every
// task is idle and the runtime jumps to the next timer.

mod common;

use std::time::Duration;

use common::{test_controller, TestControllerBuilder};
use panelkit::binder::{ClassSet, Element};
use panelkit::controller::Intent;
use panelkit::state::ToastKind;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_toast_hides_after_its_duration() {
    let mut controller = test_controller();
    let start = Instant::now();

    controller
        .apply(Intent::toast_for("Saved", ToastKind::Success, Duration::from_millis(3000)))
        .unwrap();
    assert_eq!(
        controller.classes_for(&Element::Toast),
        ClassSet::of(["show", "success"])
    );

    let changed = controller.expire_next().await;

    assert_eq!(changed, vec![Element::Toast]);
    assert!(start.elapsed() >= Duration::from_millis(3000));
    assert!(controller.classes_for(&Element::Toast).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_stale_timer_does_not_hide_newer_toast() {
    let mut controller = test_controller();
    let start = Instant::now();

    controller
        .apply(Intent::toast_for("Saved", ToastKind::Success, Duration::from_millis(5000)))
        .unwrap();
    tokio::time::sleep(Duration::from_millis(1000)).await;
    controller
        .apply(Intent::toast_for("Failed", ToastKind::Error, Duration::from_millis(3000)))
        .unwrap();

    // The second notice's timer fires first, at the 4000ms mark
    let first = controller.next_expiry().await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(4000));
    assert!(start.elapsed() < Duration::from_millis(5000));
    assert_eq!(controller.apply(Intent::Expire(first)).unwrap(), vec![Element::Toast]);
    assert!(controller.classes_for(&Element::Toast).is_empty());

    // The first notice's timer fires at 5000ms and must change nothing
    let stale = controller.next_expiry().await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(5000));
    assert!(controller.apply(Intent::Expire(stale)).unwrap().is_empty());
    assert!(controller.classes_for(&Element::Toast).is_empty());
    assert!(!controller.store().toast().is_visible());
}

#[tokio::test(start_paused = true)]
async fn test_stale_timer_leaves_current_toast_visible() {
    let mut controller = test_controller();

    controller
        .apply(Intent::toast_for("Saved", ToastKind::Success, Duration::from_millis(1000)))
        .unwrap();
    controller
        .apply(Intent::toast_for("Failed", ToastKind::Error, Duration::from_millis(3000)))
        .unwrap();

    // First timer (stale) fires at 1000ms
    assert!(controller.expire_next().await.is_empty());
    assert_eq!(
        controller.classes_for(&Element::Toast),
        ClassSet::of(["show", "error"])
    );
    assert_eq!(controller.store().toast().message(), "Failed");

    // Second timer hides it
    assert_eq!(controller.expire_next().await, vec![Element::Toast]);
}

#[tokio::test(start_paused = true)]
async fn test_dismiss_after_timeout_is_noop() {
    let mut controller = test_controller();
    controller.show_toast("Saved", ToastKind::Success);

    assert_eq!(controller.expire_next().await, vec![Element::Toast]);
    assert!(controller.apply(Intent::DismissToast).unwrap().is_empty());
    assert!(controller.classes_for(&Element::Toast).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_timer_after_manual_dismiss_is_noop() {
    let mut controller = test_controller();
    controller.show_toast("Saved", ToastKind::Success);
    assert_eq!(
        controller.apply(Intent::DismissToast).unwrap(),
        vec![Element::Toast]
    );

    assert!(controller.expire_next().await.is_empty());
    assert!(controller.classes_for(&Element::Toast).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_configured_default_duration() {
    let mut controller = TestControllerBuilder::new()
        .with_toast_duration(Duration::from_millis(750))
        .build();
    let start = Instant::now();

    controller.apply(Intent::toast("Code downloaded!", ToastKind::Success)).unwrap();
    controller.expire_next().await;

    assert!(start.elapsed() >= Duration::from_millis(750));
    assert!(start.elapsed() < Duration::from_millis(3000));
}

#[tokio::test(start_paused = true)]
async fn test_drain_expired_applies_fired_timers() {
    let mut controller = test_controller();
    controller.show_toast("Saved", ToastKind::Success);

    assert!(controller.drain_expired().is_empty());

    tokio::time::sleep(Duration::from_millis(3001)).await;
    // Let the timer task deliver its ticket
    tokio::task::yield_now().await;

    assert_eq!(controller.drain_expired(), vec![Element::Toast]);
}
