//! Scheduled care tasks.

use crate::model::value::{derive_timestamp, optional_time, CalendarDate, ClockTime, ValueParseError};
use crate::model::RecordId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Category of care work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Feeding,
    Cleaning,
    Health,
    Eggs,
    #[default]
    Other,
}

impl TaskKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Feeding => "Feeding",
            Self::Cleaning => "Cleaning",
            Self::Health => "Health check",
            Self::Eggs => "Egg collection",
            Self::Other => "Other",
        }
    }
}

impl FromStr for TaskKind {
    type Err = ValueParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "feeding" => Ok(Self::Feeding),
            "cleaning" => Ok(Self::Cleaning),
            "health" => Ok(Self::Health),
            "eggs" => Ok(Self::Eggs),
            "other" => Ok(Self::Other),
            other => Err(ValueParseError::UnknownVariant {
                field: "task type",
                value: other.to_string(),
            }),
        }
    }
}

/// One scheduled or logged care activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredTask")]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub date: CalendarDate,
    #[serde(default, with = "optional_time")]
    pub time: Option<ClockTime>,
    /// Serialized as `type`.
    #[serde(rename = "type", default)]
    pub kind: TaskKind,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub completed: bool,
    /// Epoch milliseconds of `date` (at `time` when present), local time.
    pub timestamp: i64,
}

/// Stored shape; a null or missing timestamp is re-derived from date and time.
#[derive(Deserialize)]
struct StoredTask {
    id: RecordId,
    title: String,
    date: CalendarDate,
    #[serde(default, with = "optional_time")]
    time: Option<ClockTime>,
    #[serde(rename = "type", default)]
    kind: TaskKind,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    timestamp: Option<i64>,
}

impl From<StoredTask> for Task {
    fn from(stored: StoredTask) -> Self {
        Self {
            id: stored.id,
            title: stored.title,
            date: stored.date,
            time: stored.time,
            kind: stored.kind,
            notes: stored.notes,
            completed: stored.completed,
            timestamp: stored
                .timestamp
                .unwrap_or_else(|| derive_timestamp(stored.date, stored.time)),
        }
    }
}

impl Task {
    pub fn from_draft(id: RecordId, draft: TaskDraft, today: CalendarDate) -> Self {
        let date = draft.date.unwrap_or(today);
        Self {
            id,
            title: draft.title,
            date,
            time: draft.time,
            kind: draft.kind.unwrap_or_default(),
            notes: draft.notes.unwrap_or_default(),
            completed: false,
            timestamp: derive_timestamp(date, draft.time),
        }
    }
}

/// Create input for a task. Only `title` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub date: Option<CalendarDate>,
    pub time: Option<ClockTime>,
    pub kind: Option<TaskKind>,
    pub notes: Option<String>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn on(mut self, date: CalendarDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn at(mut self, time: ClockTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn kind(mut self, kind: TaskKind) -> Self {
        self.kind = Some(kind);
        self
    }
}
