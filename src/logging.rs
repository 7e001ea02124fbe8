use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global `tracing` subscriber. Output is appended to `log_file`
/// because stdout belongs to the terminal UI while it runs. `RUST_LOG`
/// overrides the default `info` level.
pub fn init(log_file: &Path) -> Result<()> {
    let file = open_log_file(log_file)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,book_collection_manager=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

/// Like [`init`], but a log file that cannot be opened only costs the log.
/// The reason goes to stderr before the terminal UI takes over the screen and
/// the application runs without a subscriber. Returns whether logging is on.
pub fn init_or_disable(log_file: &Path) -> bool {
    match init(log_file) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("warning: logging disabled: {err:#}");
            false
        }
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create log directory")?;
        }
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
