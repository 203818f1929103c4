use jotpad_core::db::open_db_in_memory;
use jotpad_core::{
    CompletionStatus, NoteRecord, NoteRepository, RepoError, SqliteNoteRepository,
};
use rusqlite::params;

fn sample_record(list_id: i64) -> NoteRecord {
    NoteRecord {
        title: "first note".to_string(),
        body: "body text".to_string(),
        locked: false,
        list_id,
        due_date: "2026-01-16T00:00:00.000Z".to_string(),
        status: CompletionStatus::Uncompleted,
    }
}

#[test]
fn insert_and_load_round_trip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);
    let list_id = repo.create_list("Inbox").unwrap();

    let record = sample_record(list_id);
    let id = repo.insert_note(&record).unwrap();

    let loaded = repo.load_note(id).unwrap().unwrap();
    assert_eq!(loaded, record);
}

#[test]
fn load_missing_note_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);
    assert_eq!(repo.load_note(404).unwrap(), None);
}

#[test]
fn update_replaces_all_column_values() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);
    let list_id = repo.create_list("Inbox").unwrap();

    let mut record = sample_record(list_id);
    let id = repo.insert_note(&record).unwrap();

    record.title = "renamed".to_string();
    record.body = "rewritten".to_string();
    record.due_date = String::new();
    record.status = CompletionStatus::Completed;
    repo.update_note(id, &record).unwrap();

    let loaded = repo.load_note(id).unwrap().unwrap();
    assert_eq!(loaded, record);
}

#[test]
fn update_missing_note_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);
    let list_id = repo.create_list("Inbox").unwrap();

    let err = repo.update_note(404, &sample_record(list_id)).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(404)));
}

#[test]
fn invalid_persisted_status_surfaces_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);
    let list_id = repo.create_list("Inbox").unwrap();
    let id = repo.insert_note(&sample_record(list_id)).unwrap();

    conn.execute(
        "UPDATE notes SET status = 'done' WHERE id = ?1;",
        params![id],
    )
    .unwrap();

    let err = repo.load_note(id).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("done")));
}

#[test]
fn invalid_persisted_lock_flag_surfaces_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);
    let list_id = repo.create_list("Inbox").unwrap();
    let id = repo.insert_note(&sample_record(list_id)).unwrap();

    conn.execute("UPDATE notes SET locked = 7 WHERE id = ?1;", params![id])
        .unwrap();

    let err = repo.load_note(id).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("locked")));
}

#[test]
fn lists_are_sorted_by_title() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    repo.create_list("work").unwrap();
    repo.create_list("Archive").unwrap();
    repo.create_list("inbox").unwrap();

    let titles: Vec<String> = repo
        .list_lists()
        .unwrap()
        .into_iter()
        .map(|list| list.title)
        .collect();
    assert_eq!(titles, ["Archive", "inbox", "work"]);
}
