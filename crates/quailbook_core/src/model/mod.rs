//! Flock domain model.
//!
//! # Responsibility
//! - Define the three record collections: quails, egg records and tasks.
//! - Define strict date/time values shared by every record.
//!
//! # Invariants
//! - Record ids are creation instants in epoch milliseconds.
//! - Derived `timestamp` fields are computed from `date`/`time` only.

pub mod egg;
pub mod quail;
pub mod task;
pub mod value;

/// Identifier shared by all record kinds: the creation instant in epoch ms.
pub type RecordId = i64;
