//! Ratatui front-end for the Book Collection Manager. A sidebar menu offers
//! the four collection operations and the panel on the right renders whichever
//! one is selected.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
