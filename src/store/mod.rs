//! Persistence module split across logical submodules.

mod collection;
mod file;

pub use collection::BookCollection;
pub use file::{JsonFileStore, LoadOutcome};
