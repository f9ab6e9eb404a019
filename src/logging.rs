//! Tracing setup.
//!
//! The TUI owns the terminal, so log output goes to a file under the
//! platform's local data directory. The filter is read from `BIZCARD_LOG`
//! (standard `EnvFilter` syntax) and defaults to `info`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{BizcardError, BizcardResult};

pub const LOG_ENV_VAR: &str = "BIZCARD_LOG";
pub const LOG_FILE_NAME: &str = "bizcard.log";

/// `<data_local_dir>/bizcard`, if the platform has one.
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("bizcard"))
}

/// Create `dir` if needed and open the log file in append mode.
pub fn open_log_file(dir: &Path) -> BizcardResult<(PathBuf, File)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `dir` (or the default dir).
///
/// Returns the log file path. Fails if no directory is available, the file
/// cannot be opened, or a subscriber is already installed.
pub fn init_logging(dir: Option<PathBuf>) -> BizcardResult<PathBuf> {
    let dir = dir
        .or_else(default_log_dir)
        .ok_or_else(|| BizcardError::Logging("no local data directory".to_string()))?;
    let (path, file) = open_log_file(&dir)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| BizcardError::Logging(e.to_string()))?;

    Ok(path)
}
