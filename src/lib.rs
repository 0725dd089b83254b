pub mod api;
pub mod config;
pub mod logging;

pub use notes_core::{db, models};
