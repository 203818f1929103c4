//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate editor sessions and repository calls into use-case APIs.
//! - Keep hosting UI layers decoupled from storage details.

pub mod editor_service;
