//! Host commands.

use crate::controller::Intent;

/// What a key press or click asks the host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward to the controller
    Dispatch(Intent),
    /// Leave the host loop (q, Ctrl+C)
    Quit,
}
