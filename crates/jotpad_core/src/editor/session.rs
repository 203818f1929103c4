//! Editor session: one note's editable state plus change detection.
//!
//! # Responsibility
//! - Hold the current field values and the baseline snapshot they are
//!   compared against.
//! - Compute the dirty flag, support revert, and project the persisted
//!   record for saves.
//!
//! # Invariants
//! - The baseline only changes on `load` and `commit_saved`.
//! - Due-date absence is `None`, never a sentinel timestamp.
//! - Malformed persisted due dates degrade to "absent" and are logged;
//!   loading never fails.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::editor::events::{DateChosen, LockAction, PasswordOutcome};
use crate::model::due::{format_due_date, format_due_date_display, parse_due_date, DueDateParse};
use crate::model::lock::{encode_body, parse_body};
use crate::model::note::{CompletionStatus, ListId, NoteId, NoteRecord};

/// Placeholder title used when the body starts with a newline.
pub const FIRST_LINE_EMPTY_TITLE: &str = "First line empty...";

const TITLE_WINDOW_CHARS: usize = 30;

/// What a save should do with the session, decided purely from its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavePlan {
    /// Blank note that was never modified: write nothing, by policy.
    Discard,
    /// Existing note with no changes: write nothing.
    Unchanged,
    /// New note with content: create a row.
    Insert(NoteRecord),
    /// Existing note with changes: update its row.
    Update(NoteId, NoteRecord),
}

/// Field values as last loaded from or written to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Baseline {
    title: String,
    /// Raw lock-encoded body text.
    raw_body: String,
    /// Canonical due-date string, empty when unset.
    due_date: String,
    due_date_set: bool,
    completed: bool,
    list_id: ListId,
}

impl Baseline {
    fn blank(list_id: ListId) -> Self {
        Self {
            title: String::new(),
            raw_body: String::new(),
            due_date: String::new(),
            due_date_set: false,
            completed: false,
            list_id,
        }
    }
}

/// In-memory editing state for a single note.
///
/// Mutated only through explicit setters driven by user input; serializable
/// so a hosting layer can checkpoint it across process restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSession {
    note_id: Option<NoteId>,
    list_id: ListId,
    title: String,
    /// Visible body text, lock marker stripped.
    body: String,
    locked: bool,
    due_date: Option<DateTime<Utc>>,
    completed: bool,
    /// Sticky flag set by `set_completed`; the persisted field is a status
    /// string, so completion changes are tracked explicitly rather than by
    /// comparing booleans against the baseline.
    completed_changed: bool,
    /// Default date for the next date-picker round trip.
    picker_date: NaiveDate,
    baseline: Baseline,
}

impl EditorSession {
    /// Starts a blank note in the given list. The baseline is the all-empty
    /// snapshot, so an untouched session saves as a discard.
    pub fn blank(list_id: ListId, now: DateTime<Utc>) -> Self {
        Self {
            note_id: None,
            list_id,
            title: String::new(),
            body: String::new(),
            locked: false,
            due_date: None,
            completed: false,
            completed_changed: false,
            picker_date: now.date_naive(),
            baseline: Baseline::blank(list_id),
        }
    }

    /// Builds a session from a persisted record.
    ///
    /// The body is split through the lock encoding and the due-date string is
    /// parsed fail-open: a malformed value leaves the due date absent, resets
    /// the picker to `now`, and logs a warning. Loading never fails.
    pub fn load(note_id: NoteId, record: &NoteRecord, now: DateTime<Utc>) -> Self {
        let (locked, visible) = parse_body(&record.body);

        let due_date = match parse_due_date(&record.due_date) {
            DueDateParse::Absent => None,
            DueDateParse::Set(due) => Some(due),
            DueDateParse::Malformed => {
                warn!(
                    "event=due_date_parse module=editor status=malformed note_id={note_id}"
                );
                None
            }
        };
        let picker_date = due_date.map_or_else(|| now.date_naive(), |due| due.date_naive());
        let completed = record.status.is_completed();

        Self {
            note_id: Some(note_id),
            list_id: record.list_id,
            title: record.title.clone(),
            body: visible.to_string(),
            locked,
            due_date,
            completed,
            completed_changed: false,
            picker_date,
            baseline: Baseline {
                title: record.title.clone(),
                raw_body: record.body.clone(),
                due_date: due_date.map(format_due_date).unwrap_or_default(),
                due_date_set: due_date.is_some(),
                completed,
                list_id: record.list_id,
            },
        }
    }

    pub fn note_id(&self) -> Option<NoteId> {
        self.note_id
    }

    pub fn list_id(&self) -> ListId {
        self.list_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Visible body text with the lock marker stripped.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Default date for the next date-picker dialog.
    pub fn picker_date(&self) -> NaiveDate {
        self.picker_date
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Sets an explicit due date and aligns the picker default with it.
    pub fn set_due_date(&mut self, due: DateTime<Utc>) {
        self.picker_date = due.date_naive();
        self.due_date = Some(due);
    }

    /// Clears the due date and resets the picker default to today.
    pub fn clear_due_date(&mut self, now: DateTime<Utc>) {
        self.due_date = None;
        self.picker_date = now.date_naive();
    }

    /// Sets completion and raises the sticky completion-changed flag.
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
        self.completed_changed = true;
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Reassigns the note to another list.
    pub fn move_to_list(&mut self, list_id: ListId) {
        self.list_id = list_id;
    }

    /// Returns the body in its persisted lock-encoded form.
    pub fn full_body(&self) -> String {
        encode_body(self.locked, &self.body)
    }

    fn due_date_canonical(&self) -> String {
        self.due_date.map(format_due_date).unwrap_or_default()
    }

    /// Whether the current fields differ from the baseline snapshot.
    pub fn is_dirty(&self) -> bool {
        let title_changed = self.title != self.baseline.title;
        let body_changed = self.full_body() != self.baseline.raw_body;
        let date_changed = self.due_date.is_some() != self.baseline.due_date_set
            || (self.due_date.is_some() && self.due_date_canonical() != self.baseline.due_date);
        let list_changed = self.list_id != self.baseline.list_id;

        title_changed || body_changed || self.completed_changed || date_changed || list_changed
    }

    /// An all-empty note: no title, no body, no due date, not completed.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.body.is_empty()
            && self.due_date.is_none()
            && !self.completed
    }

    /// Restores all current fields from the baseline and clears the sticky
    /// completion flag. Touches no storage.
    pub fn revert(&mut self, now: DateTime<Utc>) {
        let raw_body = self.baseline.raw_body.clone();
        let (locked, visible) = parse_body(&raw_body);
        self.locked = locked;
        self.body = visible.to_string();
        self.title = self.baseline.title.clone();
        self.list_id = self.baseline.list_id;
        self.completed = self.baseline.completed;
        self.completed_changed = false;

        self.due_date = match parse_due_date(&self.baseline.due_date) {
            DueDateParse::Set(due) if self.baseline.due_date_set => Some(due),
            _ => None,
        };
        self.picker_date = self
            .due_date
            .map_or_else(|| now.date_naive(), |due| due.date_naive());
    }

    /// Projects the full set of column values to persist. Pure; the caller
    /// owns the actual write and the insert-vs-update decision.
    pub fn build_record(&self) -> NoteRecord {
        NoteRecord {
            title: self.title.clone(),
            body: self.full_body(),
            locked: self.locked,
            list_id: self.list_id,
            due_date: self.due_date_canonical(),
            status: CompletionStatus::from_completed(self.completed),
        }
    }

    /// Decides what a save should do, without performing it.
    ///
    /// An all-empty note with no established identity is never inserted,
    /// even when mutations left it flagged dirty (a completion toggle, a
    /// list reassignment): empty rows must not be created.
    pub fn save_plan(&self) -> SavePlan {
        if self.note_id.is_none() && self.is_empty() {
            return SavePlan::Discard;
        }
        if !self.is_dirty() {
            return if self.note_id.is_none() {
                SavePlan::Discard
            } else {
                SavePlan::Unchanged
            };
        }
        match self.note_id {
            Some(id) => SavePlan::Update(id, self.build_record()),
            None => SavePlan::Insert(self.build_record()),
        }
    }

    /// Records a successful write: the baseline becomes the current state and
    /// the sticky completion flag is cleared.
    pub fn commit_saved(&mut self, note_id: NoteId) {
        self.note_id = Some(note_id);
        self.baseline = Baseline {
            title: self.title.clone(),
            raw_body: self.full_body(),
            due_date: self.due_date_canonical(),
            due_date_set: self.due_date.is_some(),
            completed: self.completed,
            list_id: self.list_id,
        };
        self.completed_changed = false;
        debug!("event=session_commit module=editor status=ok note_id={note_id}");
    }

    /// Applies a date-picker result. Returns `false` and leaves the session
    /// unchanged when the chosen triple is not a real calendar date.
    pub fn apply_date_chosen(&mut self, choice: DateChosen) -> bool {
        let date = match NaiveDate::from_ymd_opt(choice.year, choice.month, choice.day) {
            Some(date) => date,
            None => return false,
        };
        let midnight = match date.and_hms_opt(0, 0, 0) {
            Some(midnight) => midnight,
            None => return false,
        };
        self.set_due_date(Utc.from_utc_datetime(&midnight));
        true
    }

    /// Applies a password dialog result. Returns whether the hosting layer
    /// may reveal the note text; unverified outcomes change nothing.
    pub fn apply_password_outcome(&mut self, outcome: PasswordOutcome) -> bool {
        if !outcome.verified {
            return false;
        }
        match outcome.action {
            LockAction::Lock => {
                self.locked = true;
                false
            }
            LockAction::Unlock => {
                self.locked = false;
                true
            }
            LockAction::Show => true,
        }
    }

    /// Whether displaying this note requires a password round trip first.
    /// A lock flag without a configured password is not enforced.
    pub fn requires_password(&self, password_configured: bool) -> bool {
        self.locked && password_configured
    }

    /// Plain-text rendering for sharing: title line, optional due line, blank
    /// line, visible body.
    pub fn share_text(&self) -> String {
        let mut text = format!("{}\n", self.title);
        if let Some(due) = self.due_date {
            text.push_str(&format!("Due: {}\n", format_due_date_display(due)));
        }
        text.push('\n');
        text.push_str(&self.body);
        text
    }
}

/// Derives a default title from body text.
///
/// Takes the first 30 characters; a newline inside that window cuts the title
/// at the first line (or substitutes the fixed placeholder when the body
/// starts with a newline). When the window truncated a longer body mid-word,
/// the title is cut back to the last space, if one exists.
pub fn derive_title(body: &str) -> String {
    let window: String = body.chars().take(TITLE_WINDOW_CHARS).collect();

    match window.find('\n') {
        Some(0) => return FIRST_LINE_EMPTY_TITLE.to_string(),
        Some(newline) => return window[..newline].to_string(),
        None => {}
    }

    let truncated = body.chars().nth(TITLE_WINDOW_CHARS).is_some();
    if truncated {
        if let Some(last_space) = window.rfind(' ') {
            if last_space > 0 {
                return window[..last_space].to_string();
            }
        }
    }

    window
}

#[cfg(test)]
mod tests {
    use super::{derive_title, FIRST_LINE_EMPTY_TITLE};

    #[test]
    fn empty_body_yields_empty_title() {
        assert_eq!(derive_title(""), "");
    }

    #[test]
    fn short_single_line_is_unchanged() {
        assert_eq!(derive_title("short title"), "short title");
    }

    #[test]
    fn first_line_is_used_when_newline_in_window() {
        assert_eq!(derive_title("first\nsecond"), "first");
    }

    #[test]
    fn leading_newline_yields_placeholder() {
        assert_eq!(derive_title("\nrest of the note"), FIRST_LINE_EMPTY_TITLE);
    }

    #[test]
    fn long_body_truncates_at_last_space() {
        let body = "one two three four five six seven eight";
        assert!(body.len() > 30);
        let title = derive_title(body);
        assert!(title.chars().count() <= 30);
        assert!(!title.ends_with(' '));
        assert!(body.starts_with(&title));
        assert_eq!(title, "one two three four five six");
    }

    #[test]
    fn long_body_without_spaces_keeps_full_window() {
        let body = "a".repeat(45);
        let title = derive_title(&body);
        assert_eq!(title.chars().count(), 30);
    }
}
