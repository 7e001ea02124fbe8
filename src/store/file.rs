use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::models::Book;

/// Indentation used when writing the collection, matching files written by
/// earlier versions of the tool.
const INDENT: &[u8] = b"    ";

/// What a load found on disk. Both empty variants hydrate an empty
/// collection; they only differ in what gets logged.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Vec<Book>),
    Missing,
    Corrupt(String),
}

impl LoadOutcome {
    pub fn into_books(self) -> Vec<Book> {
        match self {
            LoadOutcome::Loaded(books) => books,
            LoadOutcome::Missing | LoadOutcome::Corrupt(_) => Vec::new(),
        }
    }
}

/// Whole-file JSON persistence for the collection.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the collection back from disk. A missing file or contents that do
    /// not decode as a list of books yield an empty outcome instead of an
    /// error; only genuine I/O failures are returned.
    pub fn load(&self) -> StoreResult<LoadOutcome> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no collection file yet, starting empty");
                return Ok(LoadOutcome::Missing);
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_slice::<Vec<Book>>(&bytes) {
            Ok(books) => {
                info!(path = %self.path.display(), count = books.len(), "loaded collection");
                Ok(LoadOutcome::Loaded(books))
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "collection file is unreadable, starting empty"
                );
                Ok(LoadOutcome::Corrupt(err.to_string()))
            }
        }
    }

    /// Overwrite the file with `books`. Not atomic: a crash mid-write leaves a
    /// truncated file that the next load treats as corrupt.
    pub fn save(&self, books: &[Book]) -> StoreResult<()> {
        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
        books.serialize(&mut serializer)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        fs::write(&self.path, &buffer).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), count = books.len(), "saved collection");
        Ok(())
    }
}
