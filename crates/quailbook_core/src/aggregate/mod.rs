//! Read-only aggregations over the flock collections.
//!
//! # Responsibility
//! - Compute dashboard counters, the weekly egg histogram, recent history,
//!   today's tasks and the merged activity feed.
//!
//! # Invariants
//! - Every function is pure: inputs are slices plus an explicit `today`.
//! - Date matching compares whole `YYYY-MM-DD` dates, never timestamps.

pub mod activity;
pub mod dashboard;
pub mod eggs;
pub mod tasks;

pub use activity::{recent_activity, ActivityEntry, ActivityKind, ACTIVITY_FEED_LIMIT};
pub use dashboard::{dashboard_summary, DashboardSummary};
pub use eggs::{egg_histogram, recent_eggs, DayBucket, EggHistogram, RECENT_EGGS_LIMIT};
pub use tasks::tasks_for_day;
