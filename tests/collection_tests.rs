//! Tests for the collection store
//!
//! These tests verify:
//! - Listing order and ranks
//! - Round trips through the JSON file
//! - Recovery from missing or malformed files
//! - Removal of every book sharing a title
//! - Completion statistics

use std::fs;
use std::path::PathBuf;

use book_collection_manager::{Book, BookCollection, JsonFileStore, LoadOutcome};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("books_data.json");
    (temp_dir, path)
}

fn book(title: &str, read: bool) -> Book {
    Book::new(title, "Author", "1999", "Genre", read)
}

fn listing(collection: &BookCollection) -> Vec<String> {
    collection
        .list()
        .iter()
        .map(|ranked| ranked.to_string())
        .collect()
}

// =============================================================================
// Listing Tests
// =============================================================================

#[test]
fn test_list_preserves_insertion_order() {
    let (_temp, path) = setup_temp_path();
    let mut collection = BookCollection::open(&path).unwrap();

    let titles = ["Zeta", "Alpha", "Mu", "Alpha"];
    for title in titles {
        collection.add(book(title, false)).unwrap();
    }

    let ranked = collection.list();
    assert_eq!(ranked.len(), titles.len());
    for (idx, entry) in ranked.iter().enumerate() {
        assert_eq!(entry.rank, idx + 1);
        assert_eq!(entry.book.title, titles[idx]);
    }
}

#[test]
fn test_empty_title_is_accepted() {
    let (_temp, path) = setup_temp_path();
    let mut collection = BookCollection::open(&path).unwrap();
    collection.add(Book::new("", "", "", "", false)).unwrap();

    assert_eq!(listing(&collection), vec!["1.  by  () -  - Unread"]);
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_save_then_load_round_trip() {
    let (_temp, path) = setup_temp_path();
    let books = vec![
        Book::new("Dune", "Herbert", "1965", "SciFi", true),
        Book::new("Emma", "Austen", "1815", "Classic", false),
        Book::new("Dune", "Herbert", "1965", "SciFi", false),
    ];

    let store = JsonFileStore::new(&path);
    store.save(&books).unwrap();

    match store.load().unwrap() {
        LoadOutcome::Loaded(loaded) => assert_eq!(loaded, books),
        other => panic!("expected loaded collection, got {other:?}"),
    }
}

#[test]
fn test_every_mutation_is_persisted() {
    let (_temp, path) = setup_temp_path();
    let mut collection = BookCollection::open(&path).unwrap();
    collection.add(book("One", true)).unwrap();
    collection.add(book("Two", false)).unwrap();

    let reopened = BookCollection::open(&path).unwrap();
    assert_eq!(reopened.books(), collection.books());

    collection.remove("One").unwrap();
    let reopened = BookCollection::open(&path).unwrap();
    assert_eq!(reopened.books(), &[book("Two", false)]);
}

#[test]
fn test_missing_file_opens_empty() {
    let (_temp, path) = setup_temp_path();
    let collection = BookCollection::open(&path).unwrap();
    assert!(collection.is_empty());
    assert!(!path.exists());
}

#[test]
fn test_malformed_file_opens_empty() {
    let (_temp, path) = setup_temp_path();
    for contents in ["", "not json", "[{\"title\": 1}]", "{}", "[1, 2, 3]"] {
        fs::write(&path, contents).unwrap();
        let collection = BookCollection::open(&path).unwrap();
        assert!(collection.is_empty(), "expected empty for {contents:?}");
    }
}

#[test]
fn test_truncated_write_recovers_to_empty() {
    let (_temp, path) = setup_temp_path();
    let mut collection = BookCollection::open(&path).unwrap();
    collection.add(book("Half", true)).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    fs::write(&path, &written[..written.len() / 2]).unwrap();

    assert!(BookCollection::open(&path).unwrap().is_empty());
}

#[test]
fn test_reads_file_written_by_hand() {
    let (_temp, path) = setup_temp_path();
    fs::write(
        &path,
        r#"[
    {"title": "Dune", "author": "Herbert", "year": "1965", "genre": "SciFi", "read": true}
]"#,
    )
    .unwrap();

    let collection = BookCollection::open(&path).unwrap();
    assert_eq!(
        listing(&collection),
        vec!["1. Dune by Herbert (1965) - SciFi - Read"]
    );
}

// =============================================================================
// Removal Tests
// =============================================================================

#[test]
fn test_remove_unknown_title_is_noop() {
    let (_temp, path) = setup_temp_path();
    let mut collection = BookCollection::open(&path).unwrap();
    collection.add(book("Kept", false)).unwrap();
    let before = collection.books().to_vec();

    assert_eq!(collection.remove("Missing").unwrap(), 0);
    assert_eq!(collection.books(), before.as_slice());
}

#[test]
fn test_remove_drops_every_match() {
    let (_temp, path) = setup_temp_path();
    let mut collection = BookCollection::open(&path).unwrap();
    for title in ["Dup", "Other", "Dup", "Last", "Dup"] {
        collection.add(book(title, false)).unwrap();
    }

    assert_eq!(collection.remove("Dup").unwrap(), 3);
    let titles: Vec<&str> = collection
        .list()
        .iter()
        .map(|ranked| ranked.book.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Other", "Last"]);
}

#[test]
fn test_remove_is_exact_match() {
    let (_temp, path) = setup_temp_path();
    let mut collection = BookCollection::open(&path).unwrap();
    collection.add(book("Dune", false)).unwrap();
    collection.add(book("dune", false)).unwrap();
    collection.add(book("Dune ", false)).unwrap();

    assert_eq!(collection.remove("Dune").unwrap(), 1);
    assert_eq!(collection.len(), 2);
}

// =============================================================================
// Statistics Tests
// =============================================================================

#[test]
fn test_stats_on_empty_collection() {
    let (_temp, path) = setup_temp_path();
    let collection = BookCollection::open(&path).unwrap();
    let stats = collection.stats();

    assert_eq!(stats.total, 0);
    assert_eq!(stats.completion_rate(), 0.0);
}

#[test]
fn test_stats_quarter_read() {
    let (_temp, path) = setup_temp_path();
    let mut collection = BookCollection::open(&path).unwrap();
    collection.add(book("A", true)).unwrap();
    collection.add(book("B", false)).unwrap();
    collection.add(book("C", false)).unwrap();
    collection.add(book("D", false)).unwrap();

    let stats = collection.stats();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.read, 1);
    assert_eq!(stats.completion_label(), "25.00");
}

// =============================================================================
// Scenario
// =============================================================================

#[test]
fn test_dune_and_emma_scenario() {
    let (_temp, path) = setup_temp_path();
    let mut collection = BookCollection::open(&path).unwrap();

    collection
        .add(Book::new("Dune", "Herbert", "1965", "SciFi", true))
        .unwrap();
    assert_eq!(
        listing(&collection),
        vec!["1. Dune by Herbert (1965) - SciFi - Read"]
    );

    collection
        .add(Book::new("Emma", "Austen", "1815", "Classic", false))
        .unwrap();
    let stats = collection.stats();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.completion_label(), "50.00");

    collection.remove("Dune").unwrap();
    assert_eq!(
        listing(&collection),
        vec!["1. Emma by Austen (1815) - Classic - Unread"]
    );
}
