//! Persisted note and list record shapes.
//!
//! # Responsibility
//! - Define the full set of column values the editor reads and writes.
//! - Map the completion boolean to its persisted status strings.
//!
//! # Invariants
//! - `body` always carries the lock-aware encoding, never bare visible text.
//! - `due_date` is either the canonical timestamp string or empty.

use serde::{Deserialize, Serialize};

/// Stable row identifier for a note.
pub type NoteId = i64;

/// Identifier of the list a note belongs to.
pub type ListId = i64;

/// Persisted completion state.
///
/// The storage layer keeps a status string rather than a boolean, so the two
/// encodings are pinned here and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    Completed,
    Uncompleted,
}

impl CompletionStatus {
    /// Builds the status from the editor's completion boolean.
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            Self::Completed
        } else {
            Self::Uncompleted
        }
    }

    /// Returns the persisted status string.
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Uncompleted => "uncompleted",
        }
    }

    /// Parses a persisted status string.
    pub fn parse_db(value: &str) -> Option<Self> {
        match value {
            "completed" => Some(Self::Completed),
            "uncompleted" => Some(Self::Uncompleted),
            _ => None,
        }
    }

    /// Returns the completion boolean this status encodes.
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Full set of column values for one note row.
///
/// Produced by the editor session as a pure projection and consumed by the
/// repository for both inserts and updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    /// Short title text; empty is allowed.
    pub title: String,
    /// Lock-encoded body text as stored.
    pub body: String,
    /// Whether the lock marker applies; stored as 0/1.
    pub locked: bool,
    /// Containing list. A note always belongs to exactly one list.
    pub list_id: ListId,
    /// Canonical due-date string, or empty when no due date is set.
    pub due_date: String,
    /// Completion status string.
    pub status: CompletionStatus,
}

/// One row of the `lists` table, as needed by the editor's list selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRecord {
    pub id: ListId,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::{CompletionStatus, NoteRecord};

    #[test]
    fn completion_status_round_trips_through_db_strings() {
        for status in [CompletionStatus::Completed, CompletionStatus::Uncompleted] {
            assert_eq!(CompletionStatus::parse_db(status.as_db_str()), Some(status));
        }
        assert_eq!(CompletionStatus::parse_db("done"), None);
    }

    #[test]
    fn record_serialization_uses_expected_wire_fields() {
        let record = NoteRecord {
            title: "Groceries".to_string(),
            body: "milk\neggs".to_string(),
            locked: false,
            list_id: 3,
            due_date: "2026-01-16T00:00:00.000Z".to_string(),
            status: CompletionStatus::Uncompleted,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["title"], "Groceries");
        assert_eq!(json["list_id"], 3);
        assert_eq!(json["status"], "uncompleted");
    }
}
