//! Note editing session logic.
//!
//! # Responsibility
//! - Own one note's in-memory editable state and its baseline snapshot.
//! - Translate dialog outcomes into explicit state changes.
//!
//! # Invariants
//! - Dirty state is always recomputed from current fields plus baseline;
//!   it is never stored on its own.

pub mod events;
pub mod session;
