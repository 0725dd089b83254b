use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by note store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No note with the given id exists (update and delete only).
    #[error("note not found: {id}")]
    NotFound { id: String },

    /// Any failure reported by SQLite: connection, constraint, or query errors.
    #[error("database error: {0}")]
    Persistence(#[from] rusqlite::Error),
}

impl StoreError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_id() {
        let err = StoreError::not_found("abc");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "note not found: abc");
    }

    #[test]
    fn sqlite_errors_convert_to_persistence() {
        let err: StoreError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(!err.is_not_found());
        assert!(matches!(err, StoreError::Persistence(_)));
    }
}
