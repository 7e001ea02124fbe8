//! Domain models that mirror the JSON file layout and get passed throughout the
//! TUI. These types stay light-weight data holders so the store can focus on
//! persistence and the UI on presentation.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single entry in the collection. Field names double as the JSON keys in
/// the storage file, so renaming one is a file format change.
pub struct Book {
    /// Display name, also the key used when removing books. Not unique.
    pub title: String,
    pub author: String,
    /// Publication year kept as free text; "c. 1600" is as valid as "1965".
    pub year: String,
    pub genre: String,
    /// Whether the user has finished the book.
    pub read: bool,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            genre: genre.into(),
            read,
        }
    }

    /// Label for the reading status column.
    pub fn status_label(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Unread"
        }
    }
}

/// A book paired with its 1-based position in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedBook<'a> {
    pub rank: usize,
    pub book: &'a Book,
}

impl fmt::Display for RankedBook<'_> {
    /// Render the listing line, e.g. `1. Dune by Herbert (1965) - SciFi - Read`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} by {} ({}) - {} - {}",
            self.rank,
            self.book.title,
            self.book.author,
            self.book.year,
            self.book.genre,
            self.book.status_label()
        )
    }
}

/// Aggregate counts used by the progress view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionStats {
    pub total: usize,
    pub read: usize,
}

impl CollectionStats {
    pub fn unread(&self) -> usize {
        self.total.saturating_sub(self.read)
    }

    /// Percentage of books marked as read. An empty collection reports 0.
    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.read as f64 / self.total as f64 * 100.0
        }
    }

    /// Completion rate rounded to two decimals, without the percent sign.
    pub fn completion_label(&self) -> String {
        format!("{:.2}", self.completion_rate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_book_renders_listing_line() {
        let dune = Book::new("Dune", "Herbert", "1965", "SciFi", true);
        let ranked = RankedBook {
            rank: 1,
            book: &dune,
        };
        assert_eq!(ranked.to_string(), "1. Dune by Herbert (1965) - SciFi - Read");
    }

    #[test]
    fn unread_books_say_so() {
        let emma = Book::new("Emma", "Austen", "1815", "Classic", false);
        let ranked = RankedBook {
            rank: 12,
            book: &emma,
        };
        assert_eq!(
            ranked.to_string(),
            "12. Emma by Austen (1815) - Classic - Unread"
        );
    }

    #[test]
    fn completion_rate_handles_empty_collection() {
        let stats = CollectionStats::default();
        assert_eq!(stats.completion_rate(), 0.0);
        assert_eq!(stats.completion_label(), "0.00");
    }

    #[test]
    fn completion_rate_rounds_to_two_decimals() {
        let stats = CollectionStats { total: 3, read: 1 };
        assert_eq!(stats.completion_label(), "33.33");
        assert_eq!(stats.unread(), 2);

        let stats = CollectionStats { total: 4, read: 1 };
        assert_eq!(stats.completion_label(), "25.00");
    }

    #[test]
    fn json_keys_match_file_format() {
        let book = Book::new("", "Anon", "n/a", "", false);
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "",
                "author": "Anon",
                "year": "n/a",
                "genre": "",
                "read": false
            })
        );
    }
}
