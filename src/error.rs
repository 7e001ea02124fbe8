//! Error type for the persistence layer.
//!
//! The store keeps its failures typed so callers can tell a write problem from
//! a read problem. Everything above the store (UI, binary) wraps these in
//! `anyhow` with extra context.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used by the store.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but could not be read. A missing file is not an error.
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize collection")]
    Serialize(#[from] serde_json::Error),
}
