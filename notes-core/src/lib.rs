//! Core library for the notes server.
//!
//! This crate provides the note model and database operations,
//! independent of any transport layer.
//!
//! # Usage
//!
//! ```no_run
//! use notes_core::db::Database;
//! use notes_core::models::*;
//!
//! let db = Database::open_default()?;
//! db.migrate()?;
//!
//! let note = db.create_note(CreateNoteInput {
//!     title: "Groceries".into(),
//!     description: "Milk, eggs".into(),
//! })?;
//! let notes = db.get_all_notes()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod db;
pub mod error;
pub mod models;

// Re-export commonly used types at crate root
pub use db::Database;
pub use error::{StoreError, StoreResult};
