//! Task record and wire payload types.

use serde::{Deserialize, Serialize};

/// Maximum title length, counted in characters rather than bytes.
pub const MAX_TITLE_LEN: usize = 255;

/// A fully materialized task row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned id. Monotonically increasing, never reused.
    pub id: i64,
    /// Human-oriented label, 1..=255 characters.
    pub title: String,
    /// Optional free-form detail.
    pub description: Option<String>,
    /// Completion flag. `false` at creation.
    pub completed: bool,
    /// Creation stamp (UTC `YYYY-MM-DD HH:MM:SS`), immutable after insert.
    pub created_at: String,
    /// Stamp of the last successful write. Always `>= created_at`.
    pub updated_at: String,
}

/// Payload for creating a task.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTask {
    /// Requested title. A missing field deserializes to the empty string so
    /// validation can reject it with the domain's own message.
    #[serde(default)]
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Presence-aware partial update.
///
/// A field that is absent from the payload, or set to JSON `null`, leaves
/// the column untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    /// Replacement title, validated like creation when present.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_missing_title_defaults_to_empty() {
        let new_task: NewTask = serde_json::from_str("{}").unwrap();
        assert_eq!(new_task.title, "");
        assert_eq!(new_task.description, None);
    }

    #[test]
    fn new_task_full_payload() {
        let new_task: NewTask =
            serde_json::from_str(r#"{"title":"Buy milk","description":"2 liters"}"#).unwrap();
        assert_eq!(new_task.title, "Buy milk");
        assert_eq!(new_task.description.as_deref(), Some("2 liters"));
    }

    #[test]
    fn new_task_ignores_unknown_fields() {
        let new_task: NewTask =
            serde_json::from_str(r#"{"title":"x","id":7,"completed":true}"#).unwrap();
        assert_eq!(new_task.title, "x");
    }

    #[test]
    fn patch_empty_object_has_no_fields() {
        let patch: TaskPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn patch_null_field_counts_as_absent() {
        let patch: TaskPatch =
            serde_json::from_str(r#"{"title":null,"description":null,"completed":null}"#).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn patch_single_field_is_not_empty() {
        let patch: TaskPatch = serde_json::from_str(r#"{"completed":false}"#).unwrap();
        assert!(!patch.is_empty());
        assert_eq!(patch.completed, Some(false));
        assert_eq!(patch.title, None);
    }

    #[test]
    fn task_serializes_all_fields() {
        let task = Task {
            id: 1,
            title: "Buy milk".into(),
            description: None,
            completed: false,
            created_at: "2026-01-15 09:30:00".into(),
            updated_at: "2026-01-15 09:30:00".into(),
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["title"], "Buy milk");
        assert_eq!(value["description"], serde_json::Value::Null);
        assert_eq!(value["completed"], false);
        assert_eq!(value["created_at"], "2026-01-15 09:30:00");
        assert_eq!(value["updated_at"], "2026-01-15 09:30:00");
    }
}
