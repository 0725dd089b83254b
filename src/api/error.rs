use axum::extract::rejection::{BytesRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tokio::task::JoinError;

use notes_core::StoreError;

use super::SERVER_ERROR_MESSAGE;

pub type ApiResult<T> = Result<T, ApiError>;

/// Everything a note route can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing or blank.
    #[error("{0}")]
    Validation(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The blocking task running a store operation panicked or was cancelled.
    #[error("store worker failed: {0}")]
    Worker(#[from] JoinError),

    /// The request body was not valid JSON for the route.
    #[error("unreadable request body: {0}")]
    Body(#[from] JsonRejection),

    /// The request body could not be read.
    #[error("unreadable request body: {0}")]
    Read(#[from] BytesRejection),
}

impl ApiError {
    /// Get HTTP status code for this error.
    ///
    /// Missing notes on update/delete are reported like any other store
    /// failure, so clients cannot tell them apart from an unreachable database.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::NotFound { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Store(StoreError::Persistence(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Body(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Read(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body of a 400 response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(message) => (status, Json(MessageResponse { message })).into_response(),
            err @ (ApiError::Body(_) | ApiError::Read(_)) => {
                tracing::error!(error = %err, "Rejected request body");
                (status, SERVER_ERROR_MESSAGE).into_response()
            }
            err => {
                tracing::error!(error = %err, "Note operation failed");
                status.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("Title is required").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Store(StoreError::not_found("missing")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Store(persistence_error()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_message_is_the_display_text() {
        assert_eq!(ApiError::Validation("ID is required").to_string(), "ID is required");
    }

    #[tokio::test]
    async fn store_failures_have_empty_bodies() {
        let response = ApiError::Store(persistence_error()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    fn persistence_error() -> StoreError {
        let db = notes_core::Database::open_in_memory().unwrap();
        // No schema applied, so any note query fails.
        db.get_all_notes().unwrap_err()
    }
}
