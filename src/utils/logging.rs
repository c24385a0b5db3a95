//! Per-project log file.
//!
//! Everything logged with `tracing` during a run is appended to
//! `<tool dir>/logs/<project>.log`. Terminal output goes through `ui`.

use crate::project_identity;
use crate::utils::paths;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Install the file subscriber. Returns the log path when logging is active;
/// any failure just leaves logging disabled.
pub fn init(project_root: &Path, verbose: bool) -> Option<PathBuf> {
    let path = paths::log_file(project_root).ok()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(project_identity::env_key("LOG"))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_env_filter(filter)
        .try_init()
        .ok()?;

    tracing::info!(
        "{} {} started in {}",
        project_identity::BINARY_NAME,
        env!("CARGO_PKG_VERSION"),
        project_root.display()
    );
    Some(path)
}
