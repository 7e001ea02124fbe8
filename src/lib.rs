//! Core library surface for the Book Collection Manager TUI application.
//!
//! The collection store is usable on its own; the `ui` module is one consumer
//! of it and the binary simply wires the two together.
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;

pub use config::Config;
pub use error::{StoreError, StoreResult};

/// The domain types that other layers manipulate.
pub use models::{Book, CollectionStats, RankedBook};

/// Persistence entry points.
pub use store::{BookCollection, JsonFileStore, LoadOutcome};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
