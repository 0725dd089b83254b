//! Route handlers for the note endpoints.
//!
//! Every handler validates its body, runs exactly one store operation on the
//! blocking pool, and wraps the result in a JSON envelope.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use notes_core::models::{CreateNoteInput, Note, UpdateNoteInput};
use notes_core::{Database, StoreResult};

use super::error::{ApiError, ApiResult};
use super::extract::JsonBody;
use super::AppState;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const ID_REQUIRED: &str = "ID is required";

#[derive(Debug, Deserialize)]
pub struct AddNoteRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NoteIdRequest {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub note: Note,
}

#[derive(Debug, Serialize)]
pub struct FoundNoteResponse {
    pub note: Option<Note>,
}

#[derive(Debug, Serialize)]
pub struct NotesResponse {
    pub notes: Vec<Note>,
}

/// Requires a value that is not blank after trimming.
fn require(value: Option<String>, message: &'static str) -> ApiResult<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::Validation(message)),
    }
}

/// Requires a value to be present; blank is accepted.
fn present(value: Option<String>, message: &'static str) -> ApiResult<String> {
    value.ok_or(ApiError::Validation(message))
}

async fn run_store<T, F>(db: &Database, op: F) -> ApiResult<T>
where
    F: FnOnce(&Database) -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    let db = db.clone();
    Ok(tokio::task::spawn_blocking(move || op(&db)).await??)
}

pub async fn add_note(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<AddNoteRequest>,
) -> ApiResult<Json<NoteResponse>> {
    let title = require(req.title, TITLE_REQUIRED)?;
    let description = require(req.description, DESCRIPTION_REQUIRED)?;

    let note = run_store(&state.db, move |db| {
        db.create_note(CreateNoteInput { title, description })
    })
    .await?;

    tracing::info!(note_id = %note.id, "Note added");
    Ok(Json(NoteResponse { note }))
}

pub async fn get_note(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<NoteIdRequest>,
) -> ApiResult<Json<FoundNoteResponse>> {
    let id = require(req.id, ID_REQUIRED)?;

    let note = run_store(&state.db, move |db| db.get_note(&id)).await?;

    Ok(Json(FoundNoteResponse { note }))
}

pub async fn update_note(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UpdateNoteRequest>,
) -> ApiResult<Json<NoteResponse>> {
    let id = require(req.id, ID_REQUIRED)?;
    let title = present(req.title, TITLE_REQUIRED)?;
    let description = present(req.description, DESCRIPTION_REQUIRED)?;

    let note = run_store(&state.db, move |db| {
        db.update_note(UpdateNoteInput {
            id,
            title,
            description,
        })
    })
    .await?;

    tracing::info!(note_id = %note.id, "Note updated");
    Ok(Json(NoteResponse { note }))
}

pub async fn all_notes(State(state): State<AppState>) -> ApiResult<Json<NotesResponse>> {
    let notes = run_store(&state.db, |db| db.get_all_notes()).await?;
    Ok(Json(NotesResponse { notes }))
}

pub async fn delete_note(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<NoteIdRequest>,
) -> ApiResult<StatusCode> {
    let id = require(req.id, ID_REQUIRED)?;

    let note = run_store(&state.db, move |db| db.delete_note(&id)).await?;

    tracing::info!(note_id = %note.id, "Note deleted");
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_missing_and_blank() {
        assert!(matches!(
            require(None, TITLE_REQUIRED),
            Err(ApiError::Validation(TITLE_REQUIRED))
        ));
        assert!(matches!(
            require(Some("  \t\n".into()), ID_REQUIRED),
            Err(ApiError::Validation(ID_REQUIRED))
        ));
    }

    #[test]
    fn require_keeps_value_untrimmed() {
        assert_eq!(require(Some(" A ".into()), TITLE_REQUIRED).unwrap(), " A ");
    }

    #[test]
    fn present_accepts_blank() {
        assert_eq!(present(Some(String::new()), DESCRIPTION_REQUIRED).unwrap(), "");
        assert!(present(None, DESCRIPTION_REQUIRED).is_err());
    }
}
