//! Core use-case services.
//!
//! # Responsibility
//! - Own the in-memory collections and persist them after every mutation.
//! - Keep the presentation layer decoupled from storage details.

pub mod flock_service;
pub mod ids;
pub mod settings_service;
