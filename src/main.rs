//! Binary entry point that glues the JSON-backed collection to the TUI: resolve
//! paths, start logging, load the collection, and drive the Ratatui event loop
//! until the user exits.
use anyhow::Context;
use book_collection_manager::{logging, run_app, App, BookCollection, Config};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    logging::init_or_disable(&config.log_file);
    tracing::info!(data_file = %config.data_file.display(), "starting book collection manager");

    let collection =
        BookCollection::open(&config.data_file).context("failed to load book collection")?;

    let mut app = App::new(collection);
    run_app(&mut app)
}
