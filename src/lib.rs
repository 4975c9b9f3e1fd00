//! panelkit - panel visibility and toast notification controller
//!
//! The core is three layers:
//! - [`state`]: the visibility store, sole owner of panel flags and the toast
//! - [`binder`]: pure projection from the store to per-element class sets
//! - [`controller`]: single writer applying intents and toast timers
//!
//! [`ui`], [`input`] and [`terminal`] make up the terminal demo host that consumes the
//! class sets.

pub mod binder;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod logging;
pub mod state;
pub mod terminal;
pub mod ui;
