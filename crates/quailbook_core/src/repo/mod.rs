//! Persistence adapter: key-value storage and collection codecs.
//!
//! # Responsibility
//! - Define the opaque key → string store contract.
//! - Encode/decode whole record collections under fixed keys.
//!
//! # Invariants
//! - Collections are always written in full, never as diffs.
//! - An absent or unreadable collection loads as empty.

pub mod collection;
pub mod kv_repo;
