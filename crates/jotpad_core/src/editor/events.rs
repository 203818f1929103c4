//! Dialog outcomes delivered to the editing session.
//!
//! The hosting UI owns the date-picker and password dialogs; their results
//! cross the boundary as plain values so the session never touches an event
//! loop.

use serde::{Deserialize, Serialize};

/// What the password dialog was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockAction {
    /// Flag the note as locked.
    Lock,
    /// Clear the lock flag and reveal the text.
    Unlock,
    /// Reveal the text of a locked note without changing the flag.
    Show,
}

/// Result of a password dialog round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOutcome {
    pub action: LockAction,
    /// Whether the entered password was verified by the dialog.
    pub verified: bool,
}

/// Result of a date-picker dialog round trip. `month` and `day` are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateChosen {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}
