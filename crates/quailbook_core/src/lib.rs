//! Core domain logic for Quailbook, a local poultry record keeper.
//! This crate owns the records, their persistence and every derived view.

pub mod aggregate;
pub mod calendar;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use aggregate::{ActivityEntry, ActivityKind, DashboardSummary, DayBucket, EggHistogram};
pub use calendar::{CalendarCursor, CalendarDay, CalendarMonth, WEEKDAY_HEADERS};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::egg::{EggDraft, EggRecord};
pub use model::quail::{Health, Quail, QuailDraft, QuailPatch, Sex};
pub use model::task::{Task, TaskDraft, TaskKind};
pub use model::value::{derive_timestamp, CalendarDate, ClockTime, ValueParseError};
pub use model::RecordId;
pub use repo::kv_repo::{KeyValueStore, MemoryKvStore, RepoError, RepoResult, SqliteKvStore};
pub use service::flock_service::{Confirm, FlockStore, DELETE_QUAIL_PROMPT};
pub use service::ids::{ClockIdSource, IdSource};
pub use service::settings_service::{AssistantSettings, SettingsService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
