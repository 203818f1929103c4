//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `jotpad_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use chrono::Utc;
use jotpad_core::db::open_db_in_memory;
use jotpad_core::{EditorService, SqliteNoteRepository};

fn main() {
    println!("jotpad_core version={}", jotpad_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("jotpad_core db_open failed: {err}");
            std::process::exit(1);
        }
    };
    let service = EditorService::new(SqliteNoteRepository::new(&conn));

    let outcome = service
        .create_list("Inbox")
        .map_err(|err| err.to_string())
        .and_then(|list_id| {
            let mut session = service.start_blank(list_id, Utc::now());
            session.set_title("smoke");
            session.set_body("smoke body");
            service.save(&mut session).map_err(|err| err.to_string())
        });

    match outcome {
        Ok(outcome) => println!("jotpad_core save_outcome={outcome:?}"),
        Err(err) => {
            eprintln!("jotpad_core smoke save failed: {err}");
            std::process::exit(1);
        }
    }
}
