use std::env;
use std::path::PathBuf;

use directories::BaseDirs;

/// File name used for the collection when no override is given. Relative to
/// the working directory so each folder can hold its own reading list.
pub const DEFAULT_DATA_FILE: &str = "books_data.json";
/// Environment variable that replaces [`DEFAULT_DATA_FILE`].
pub const DATA_FILE_ENV: &str = "BOOK_COLLECTION_FILE";
/// Folder name used beneath the user's home directory for the log file.
const LOG_DIR_NAME: &str = ".book-collection-manager";
/// Log file name stored inside the log directory.
const LOG_FILE_NAME: &str = "manager.log";

/// Paths the application needs at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file holding the collection.
    pub data_file: PathBuf,
    /// Where `tracing` output goes while the TUI owns the terminal.
    pub log_file: PathBuf,
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        let data_file = env::var_os(DATA_FILE_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        Self {
            data_file,
            log_file: log_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_file: log_path(),
        }
    }
}

/// Resolve the log file inside the user's home, falling back to the working
/// directory when no home can be located.
fn log_path() -> PathBuf {
    match BaseDirs::new() {
        Some(base_dirs) => base_dirs.home_dir().join(LOG_DIR_NAME).join(LOG_FILE_NAME),
        None => PathBuf::from(LOG_FILE_NAME),
    }
}
