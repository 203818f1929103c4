//! Note/list repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the storage operations the editor service depends on:
//!   load-by-id, insert, update, and list management.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `insert_note`/`update_note` write the full set of column values; there
//!   are no partial updates.
//! - Read paths reject invalid persisted state (unknown status strings,
//!   out-of-range lock flags) instead of masking it.

use crate::db::DbError;
use crate::model::note::{CompletionStatus, ListId, ListRecord, NoteId, NoteRecord};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NOTE_SELECT_SQL: &str = "SELECT
    title,
    body,
    locked,
    list_id,
    due_date,
    status
FROM notes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(NoteId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for note storage operations.
pub trait NoteRepository {
    /// Loads one note by row id, or `None` when no such row exists.
    fn load_note(&self, id: NoteId) -> RepoResult<Option<NoteRecord>>;
    /// Creates a note row and returns its id.
    fn insert_note(&self, record: &NoteRecord) -> RepoResult<NoteId>;
    /// Replaces all column values of an existing note row.
    fn update_note(&self, id: NoteId, record: &NoteRecord) -> RepoResult<()>;
    /// Creates a list and returns its id.
    fn create_list(&self, title: &str) -> RepoResult<ListId>;
    /// Returns all lists sorted by title.
    fn list_lists(&self) -> RepoResult<Vec<ListRecord>>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn load_note(&self, id: NoteId) -> RepoResult<Option<NoteRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }

        Ok(None)
    }

    fn insert_note(&self, record: &NoteRecord) -> RepoResult<NoteId> {
        self.conn.execute(
            "INSERT INTO notes (
                title,
                body,
                locked,
                list_id,
                due_date,
                status,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, (strftime('%s', 'now') * 1000));",
            params![
                record.title.as_str(),
                record.body.as_str(),
                bool_to_int(record.locked),
                record.list_id,
                record.due_date.as_str(),
                record.status.as_db_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_note(&self, id: NoteId, record: &NoteRecord) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE notes
             SET
                title = ?1,
                body = ?2,
                locked = ?3,
                list_id = ?4,
                due_date = ?5,
                status = ?6,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?7;",
            params![
                record.title.as_str(),
                record.body.as_str(),
                bool_to_int(record.locked),
                record.list_id,
                record.due_date.as_str(),
                record.status.as_db_str(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn create_list(&self, title: &str) -> RepoResult<ListId> {
        self.conn
            .execute("INSERT INTO lists (title) VALUES (?1);", [title])?;
        Ok(self.conn.last_insert_rowid())
    }

    fn list_lists(&self) -> RepoResult<Vec<ListRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title FROM lists ORDER BY title COLLATE NOCASE ASC, id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut lists = Vec::new();
        while let Some(row) = rows.next()? {
            lists.push(ListRecord {
                id: row.get("id")?,
                title: row.get("title")?,
            });
        }
        Ok(lists)
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<NoteRecord> {
    let status_text: String = row.get("status")?;
    let status = CompletionStatus::parse_db(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid status `{status_text}` in notes.status"))
    })?;

    let locked = match row.get::<_, i64>("locked")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid locked value `{other}` in notes.locked"
            )));
        }
    };

    Ok(NoteRecord {
        title: row.get("title")?,
        body: row.get("body")?,
        locked,
        list_id: row.get("list_id")?,
        due_date: row.get("due_date")?,
        status,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
