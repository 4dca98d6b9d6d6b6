use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Route `tracing` output to a log file; the terminal belongs to the TUI.
///
/// Returns the path actually used.
pub fn init(log_file: Option<&Path>) -> Result<PathBuf> {
    let path = log_file
        .map(Path::to_path_buf)
        .or_else(default_log_path)
        .ok_or_else(|| eyre!("no cache directory available for the log file"))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("opening log file {}", path.display()))?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eyre!("failed to set up logging: {e}"))?;

    Ok(path)
}

fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("calendar-summary").join("calendar-summary.log"))
}
