use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

use super::Database;
use crate::error::{StoreError, StoreResult};
use crate::models::{CreateNoteInput, Note, UpdateNoteInput};

const NOTE_COLUMNS: &str = "id, title, description, created_at";

fn row_to_note(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        created_at: row.get(3)?,
    })
}

impl Database {
    pub fn create_note(&self, input: CreateNoteInput) -> StoreResult<Note> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let note = self.with_connection(|conn| {
            Ok(conn.query_row(
                &format!(
                    "INSERT INTO notes (id, title, description, created_at)
                     VALUES (?1, ?2, ?3, ?4)
                     RETURNING {NOTE_COLUMNS}"
                ),
                params![id, input.title, input.description, now],
                row_to_note,
            )?)
        })?;

        tracing::debug!(note_id = %note.id, "Created note");
        Ok(note)
    }

    /// Returns `None` when no note has this id.
    pub fn get_note(&self, id: &str) -> StoreResult<Option<Note>> {
        self.with_connection(|conn| {
            Ok(conn
                .query_row(
                    &format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?1"),
                    [id],
                    row_to_note,
                )
                .optional()?)
        })
    }

    /// Returns every note in the database's natural order.
    pub fn get_all_notes(&self) -> StoreResult<Vec<Note>> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!("SELECT {NOTE_COLUMNS} FROM notes"))?;
            let notes = stmt
                .query_map([], row_to_note)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(notes)
        })
    }

    /// Overwrites title and description. Fails with [`StoreError::NotFound`]
    /// if the id does not exist.
    pub fn update_note(&self, input: UpdateNoteInput) -> StoreResult<Note> {
        let note = self.with_connection(|conn| {
            Ok(conn
                .query_row(
                    &format!(
                        "UPDATE notes SET title = ?2, description = ?3
                         WHERE id = ?1
                         RETURNING {NOTE_COLUMNS}"
                    ),
                    params![input.id, input.title, input.description],
                    row_to_note,
                )
                .optional()?)
        })?;

        let note = note.ok_or_else(|| StoreError::not_found(&input.id))?;
        tracing::debug!(note_id = %note.id, "Updated note");
        Ok(note)
    }

    /// Removes the note and returns what it held. Fails with
    /// [`StoreError::NotFound`] if the id does not exist.
    pub fn delete_note(&self, id: &str) -> StoreResult<Note> {
        let note = self.with_connection(|conn| {
            Ok(conn
                .query_row(
                    &format!("DELETE FROM notes WHERE id = ?1 RETURNING {NOTE_COLUMNS}"),
                    [id],
                    row_to_note,
                )
                .optional()?)
        })?;

        let note = note.ok_or_else(|| StoreError::not_found(id))?;
        tracing::debug!(note_id = %note.id, "Deleted note");
        Ok(note)
    }
}
