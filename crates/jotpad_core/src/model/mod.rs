//! Domain model for note editing.
//!
//! # Responsibility
//! - Define the persisted record shapes shared by editor and storage.
//! - Own the lock-aware body encoding and canonical due-date formats.
//!
//! # Invariants
//! - Due-date absence is a distinct state; no sentinel timestamps.
//! - Completion is persisted as a status string, not a boolean.

pub mod due;
pub mod lock;
pub mod note;
