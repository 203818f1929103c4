//! Editor use-case service.
//!
//! # Responsibility
//! - Open notes into editing sessions and execute their save plans.
//! - Own the insert-vs-update decision and baseline commit after a write.
//!
//! # Invariants
//! - A blank never-modified session is discarded silently; no row is written.
//! - Every successful write is followed by `commit_saved` on the session, so
//!   the session is clean immediately after `save` returns.
//! - Saves return an explicit outcome; there is no observer channel.

use crate::editor::session::{EditorSession, SavePlan};
use crate::model::note::{ListId, ListRecord, NoteId};
use crate::repo::note_repo::{NoteRepository, RepoError, RepoResult};
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for editor use-cases.
#[derive(Debug)]
pub enum EditorError {
    /// Caller asked to open a note without an established identity.
    UnidentifiedNote,
    /// The requested note row does not exist.
    NoteNotFound(NoteId),
    /// The target list id is not a usable list identity.
    InvalidListId(ListId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnidentifiedNote => write!(f, "note has no established identity"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidListId(id) => write!(f, "invalid list id: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for EditorError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NoteNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Result of executing a session's save plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Blank never-modified note; nothing was written.
    Discarded,
    /// No changes; nothing was written.
    Unchanged,
    /// A new row was created.
    Created(NoteId),
    /// The existing row was updated.
    Updated(NoteId),
}

/// Editor service facade over repository implementations.
pub struct EditorService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> EditorService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Starts a blank editing session in the given list.
    pub fn start_blank(&self, list_id: ListId, now: DateTime<Utc>) -> EditorSession {
        EditorSession::blank(list_id, now)
    }

    /// Opens an existing note into an editing session.
    ///
    /// # Errors
    /// - `UnidentifiedNote` for a non-positive id.
    /// - `NoteNotFound` when the row does not exist.
    pub fn open_note(&self, id: NoteId, now: DateTime<Utc>) -> Result<EditorSession, EditorError> {
        if id <= 0 {
            return Err(EditorError::UnidentifiedNote);
        }
        let record = self
            .repo
            .load_note(id)?
            .ok_or(EditorError::NoteNotFound(id))?;
        Ok(EditorSession::load(id, &record, now))
    }

    /// Executes the session's save plan and commits the baseline on success.
    pub fn save(&self, session: &mut EditorSession) -> Result<SaveOutcome, EditorError> {
        match session.save_plan() {
            SavePlan::Discard => {
                debug!("event=note_save module=service status=discarded");
                Ok(SaveOutcome::Discarded)
            }
            SavePlan::Unchanged => Ok(SaveOutcome::Unchanged),
            SavePlan::Insert(record) => {
                let id = self.repo.insert_note(&record)?;
                session.commit_saved(id);
                info!("event=note_save module=service status=created note_id={id}");
                Ok(SaveOutcome::Created(id))
            }
            SavePlan::Update(id, record) => {
                self.repo.update_note(id, &record)?;
                session.commit_saved(id);
                info!("event=note_save module=service status=updated note_id={id}");
                Ok(SaveOutcome::Updated(id))
            }
        }
    }

    /// Moves the session's note to another list and saves immediately.
    ///
    /// Only valid for a note with an established identity; a never-saved
    /// session has no row to move.
    pub fn move_note(
        &self,
        session: &mut EditorSession,
        list_id: ListId,
    ) -> Result<SaveOutcome, EditorError> {
        if session.note_id().is_none() {
            return Err(EditorError::UnidentifiedNote);
        }
        if list_id <= 0 {
            return Err(EditorError::InvalidListId(list_id));
        }
        session.move_to_list(list_id);
        self.save(session)
    }

    /// Creates a list and returns its id.
    pub fn create_list(&self, title: &str) -> RepoResult<ListId> {
        self.repo.create_list(title)
    }

    /// Returns all lists for the editor's list selector.
    pub fn list_lists(&self) -> RepoResult<Vec<ListRecord>> {
        self.repo.list_lists()
    }
}
