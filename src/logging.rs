//! Log file setup.
//!
//! The terminal host owns stdout, so logs go to
//! `<data dir>/panelkit/panelkit.log` through a `tracing-subscriber` fmt
//! layer filtered by `PANELKIT_LOG`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{PanelkitError, PanelkitResult};

pub const LOG_FILE_NAME: &str = "panelkit.log";

/// Default log directory, if the platform has a data dir.
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("panelkit"))
}

/// Create `dir` if needed and open the log file for appending.
pub fn open_log_file(dir: &Path) -> PanelkitResult<(PathBuf, File)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Build the filter, falling back to the default directive if `directive`
/// does not parse.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER))
}

/// Message printed when the log file cannot be opened.
pub fn disabled_notice(err: &PanelkitError) -> String {
    format!(
        "panelkit: logging disabled ({}). {}",
        err.user_message(),
        err.category().recovery_hint()
    )
}

/// Install the global subscriber writing to the log file.
///
/// Returns the log path, or `None` if no log file could be opened; the
/// host keeps running without logs in that case.
pub fn init(directive: &str) -> Option<PathBuf> {
    let dir = default_log_dir()?;
    let (path, file) = match open_log_file(&dir) {
        Ok(opened) => opened,
        Err(err) => {
            eprintln!("{}", disabled_notice(&err));
            return None;
        }
    };

    let layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true);

    let installed = tracing_subscriber::registry()
        .with(build_filter(directive))
        .with(layer)
        .try_init()
        .is_ok();

    installed.then_some(path)
}
