//! Error handling for panelkit.
//!
//! - **Domain errors**: [`StoreError`] for panel operations, [`ConfigError`]
//!   for environment parsing
//! - **Unified error**: [`PanelkitError`] wraps both plus I/O for the host
//! - **Categories**: [`ErrorCategory`] for handling decisions
//!
//! | Category | Source | Retryable |
//! |----------|--------|-----------|
//! | Client | Unknown or duplicate panel id | No |
//! | Configuration | Bad `PANELKIT_*` value | No |
//! | System | Log file, terminal I/O | No |

mod category;
mod config;
mod panelkit_error;
mod store;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use panelkit_error::{PanelkitError, PanelkitResult};
pub use store::StoreError;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
