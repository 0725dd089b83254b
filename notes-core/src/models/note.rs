use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A short text note.
///
/// `id` and `created_at` are assigned by the database at insert time and never
/// change afterwards. Only `title` and `description` can be updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteInput {
    pub title: String,
    pub description: String,
}

/// Input for overwriting the mutable fields of an existing note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNoteInput {
    pub id: String,
    pub title: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_with_camel_case_keys() {
        let note = Note {
            id: "1".into(),
            title: "Test Note".into(),
            description: "Test Description".into(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&note).unwrap();

        assert_eq!(json["id"], "1");
        assert_eq!(json["title"], "Test Note");
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn keeps_special_characters() {
        let note = Note {
            id: "1".into(),
            title: "Note with special chars: !@#$%^&*()".into(),
            description: "Description with emoji 😀 and newline\n".into(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&note).unwrap();
        let back: Note = serde_json::from_str(&json).unwrap();

        assert_eq!(back, note);
    }
}
