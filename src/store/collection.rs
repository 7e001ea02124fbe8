use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::StoreResult;
use crate::models::{Book, CollectionStats, RankedBook};

use super::file::JsonFileStore;

/// The in-memory collection together with the file it mirrors. Every mutation
/// is written through before it returns, and a failed write leaves the
/// in-memory sequence as it was.
#[derive(Debug)]
pub struct BookCollection {
    books: Vec<Book>,
    store: JsonFileStore,
}

impl BookCollection {
    /// Load the collection stored at `path`, starting empty when the file is
    /// missing or unreadable as JSON.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let store = JsonFileStore::new(path);
        let books = store.load()?.into_books();
        Ok(Self { books, store })
    }

    /// Build a collection from already-loaded books without touching disk.
    pub fn with_books(path: impl Into<PathBuf>, books: Vec<Book>) -> Self {
        Self {
            books,
            store: JsonFileStore::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Append a book and persist. Titles are not deduplicated.
    pub fn add(&mut self, book: Book) -> StoreResult<()> {
        info!(title = %book.title, "adding book");
        self.books.push(book);
        if let Err(err) = self.store.save(&self.books) {
            warn!(error = %err, "save failed, discarding new book");
            self.books.pop();
            return Err(err);
        }
        Ok(())
    }

    /// Remove every book titled `title` and persist. Returns how many were
    /// dropped; zero is not an error.
    pub fn remove(&mut self, title: &str) -> StoreResult<usize> {
        let remaining: Vec<Book> = self
            .books
            .iter()
            .filter(|book| book.title != title)
            .cloned()
            .collect();
        let removed = self.books.len() - remaining.len();

        self.store.save(&remaining)?;
        self.books = remaining;
        info!(title, removed, "removed books");
        Ok(removed)
    }

    /// Every book with its 1-based position.
    pub fn list(&self) -> Vec<RankedBook<'_>> {
        self.books
            .iter()
            .enumerate()
            .map(|(idx, book)| RankedBook {
                rank: idx + 1,
                book,
            })
            .collect()
    }

    pub fn stats(&self) -> CollectionStats {
        CollectionStats {
            total: self.books.len(),
            read: self.books.iter().filter(|book| book.read).count(),
        }
    }

    /// Distinct titles in first-seen order, for the removal picker.
    pub fn titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = Vec::new();
        for book in &self.books {
            if !titles.contains(&book.title.as_str()) {
                titles.push(&book.title);
            }
        }
        titles
    }
}
