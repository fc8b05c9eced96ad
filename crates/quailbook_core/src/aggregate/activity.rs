//! Merged recent-activity feed across all three collections.
//!
//! Quails are picked by raw acquisition date, eggs and tasks by derived
//! timestamp. Same-day quails keep insertion order.

use crate::model::egg::EggRecord;
use crate::model::quail::Quail;
use crate::model::task::Task;
use crate::model::value::CalendarDate;

/// Candidates taken from each collection before merging.
pub const ACTIVITY_PER_SOURCE: usize = 3;
/// Entries returned by [`recent_activity`].
pub const ACTIVITY_FEED_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityKind {
    QuailAdded { name: String },
    EggsCollected { count: u32 },
    TaskScheduled { title: String },
}

impl ActivityKind {
    /// One-line headline for the feed.
    pub fn headline(&self) -> String {
        match self {
            Self::QuailAdded { name } => format!("Quail added: {name}"),
            Self::EggsCollected { count } => format!("Collected {count} eggs"),
            Self::TaskScheduled { title } => format!("Task: {title}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub date: CalendarDate,
    pub timestamp: i64,
}

pub fn recent_activity(quails: &[Quail], eggs: &[EggRecord], tasks: &[Task]) -> Vec<ActivityEntry> {
    let mut recent_quails: Vec<&Quail> = quails.iter().collect();
    recent_quails.sort_by(|a, b| b.date.cmp(&a.date));

    let mut recent_eggs: Vec<&EggRecord> = eggs.iter().collect();
    recent_eggs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut recent_tasks: Vec<&Task> = tasks.iter().collect();
    recent_tasks.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let quail_entries = recent_quails
        .into_iter()
        .take(ACTIVITY_PER_SOURCE)
        .map(|quail| ActivityEntry {
            kind: ActivityKind::QuailAdded {
                name: quail.name.clone(),
            },
            date: quail.date,
            timestamp: quail.acquired_timestamp(),
        });
    let egg_entries = recent_eggs
        .into_iter()
        .take(ACTIVITY_PER_SOURCE)
        .map(|record| ActivityEntry {
            kind: ActivityKind::EggsCollected {
                count: record.count,
            },
            date: record.date,
            timestamp: record.timestamp,
        });
    let task_entries = recent_tasks
        .into_iter()
        .take(ACTIVITY_PER_SOURCE)
        .map(|task| ActivityEntry {
            kind: ActivityKind::TaskScheduled {
                title: task.title.clone(),
            },
            date: task.date,
            timestamp: task.timestamp,
        });

    let mut feed: Vec<ActivityEntry> = quail_entries.chain(egg_entries).chain(task_entries).collect();
    feed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    feed.truncate(ACTIVITY_FEED_LIMIT);
    feed
}
