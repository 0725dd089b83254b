//! SQLite-backed note storage.
//!
//! [`Database`] is a cheap, cloneable handle around a single connection. Every
//! note operation is one statement and one round trip; nothing is cached
//! between calls.

mod notes;
mod schema;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use directories::ProjectDirs;
use parking_lot::Mutex;
use rusqlite::Connection;

use crate::error::StoreResult;

pub use schema::SCHEMA;

const DATABASE_FILE: &str = "notes.db";

#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Opens (or creates) the database file at `path`, creating parent
    /// directories as needed.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("opening database {}", path.display()))?;
        tracing::debug!("Opened database at {}", path.display());

        Ok(Self::from_connection(conn))
    }

    /// Opens the database in the platform data directory.
    pub fn open_default() -> anyhow::Result<Self> {
        Self::open(Self::default_path()?)
    }

    /// Opens a private in-memory database. Used by tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self::from_connection(conn))
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "notes-server")
            .context("could not determine a data directory for this platform")?;
        Ok(dirs.data_dir().join(DATABASE_FILE))
    }

    /// Applies the schema. Safe to run on every start.
    pub fn migrate(&self) -> StoreResult<()> {
        self.with_connection(|conn| {
            conn.execute_batch(SCHEMA)?;
            Ok(())
        })
    }

    /// Runs `f` with exclusive access to the underlying connection.
    pub fn with_connection<T, F>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&Connection) -> StoreResult<T>,
    {
        let conn = self.conn.lock();
        f(&conn)
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn table_exists(db: &Database, name: &str) -> bool {
        db.with_connection(|conn| {
            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [name],
                |row| row.get(0),
            )?;
            Ok(count == 1)
        })
        .unwrap()
    }

    #[test]
    fn migrate_creates_notes_table() {
        let db = Database::open_in_memory().unwrap();
        assert!(!table_exists(&db, "notes"));

        db.migrate().unwrap();

        assert!(table_exists(&db, "notes"));
    }

    #[test]
    fn migrate_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        db.migrate().unwrap();
        db.migrate().unwrap();
        assert!(table_exists(&db, "notes"));
    }

    #[test]
    fn open_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("notes.db");

        let db = Database::open(&path).unwrap();
        db.migrate().unwrap();

        assert!(path.exists());
    }

    #[test]
    fn clones_share_the_connection() {
        let db = Database::open_in_memory().unwrap();
        let other = db.clone();

        db.migrate().unwrap();

        assert!(table_exists(&other, "notes"));
    }
}
