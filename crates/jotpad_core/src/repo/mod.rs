//! Persistence layer.
//!
//! # Responsibility
//! - Keep SQL details behind the repository trait the editor service uses.
//!
//! # Invariants
//! - Invalid persisted state surfaces as an error instead of being masked.

pub mod note_repo;
