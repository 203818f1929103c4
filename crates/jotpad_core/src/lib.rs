//! Core domain logic for Jotpad note editing.
//! This crate is the single source of truth for editor-session invariants.

pub mod db;
pub mod editor;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use editor::events::{DateChosen, LockAction, PasswordOutcome};
pub use editor::session::{derive_title, EditorSession, SavePlan, FIRST_LINE_EMPTY_TITLE};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::due::{format_due_date, format_due_date_display, parse_due_date, DueDateParse};
pub use model::lock::{encode_body, parse_body};
pub use model::note::{CompletionStatus, ListId, ListRecord, NoteId, NoteRecord};
pub use repo::note_repo::{NoteRepository, RepoError, RepoResult, SqliteNoteRepository};
pub use service::editor_service::{EditorError, EditorService, SaveOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
