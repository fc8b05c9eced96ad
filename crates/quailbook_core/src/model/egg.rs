//! Egg-collection records.
//!
//! Records are append-only; `timestamp` is fixed at creation from the
//! record's own date and time. Stored records with a null or missing
//! timestamp get it re-derived on load.

use crate::model::value::{derive_timestamp, optional_time, CalendarDate, ClockTime};
use crate::model::RecordId;
use serde::{Deserialize, Serialize};

/// One logged egg collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredEggRecord")]
pub struct EggRecord {
    pub id: RecordId,
    pub count: u32,
    pub date: CalendarDate,
    #[serde(default, with = "optional_time")]
    pub time: Option<ClockTime>,
    #[serde(default)]
    pub notes: String,
    /// Epoch milliseconds of `date` at `time`, local time.
    pub timestamp: i64,
}

#[derive(Deserialize)]
struct StoredEggRecord {
    id: RecordId,
    count: u32,
    date: CalendarDate,
    #[serde(default, with = "optional_time")]
    time: Option<ClockTime>,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    timestamp: Option<i64>,
}

impl From<StoredEggRecord> for EggRecord {
    fn from(stored: StoredEggRecord) -> Self {
        Self {
            id: stored.id,
            count: stored.count,
            date: stored.date,
            time: stored.time,
            notes: stored.notes,
            timestamp: stored
                .timestamp
                .unwrap_or_else(|| derive_timestamp(stored.date, stored.time)),
        }
    }
}

impl EggRecord {
    pub fn from_draft(id: RecordId, draft: EggDraft, today: CalendarDate) -> Self {
        let date = draft.date.unwrap_or(today);
        Self {
            id,
            count: draft.count,
            date,
            time: draft.time,
            notes: draft.notes.unwrap_or_default(),
            timestamp: derive_timestamp(date, draft.time),
        }
    }
}

/// Create input for an egg record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EggDraft {
    pub count: u32,
    pub date: Option<CalendarDate>,
    pub time: Option<ClockTime>,
    pub notes: Option<String>,
}

impl EggDraft {
    pub fn new(count: u32) -> Self {
        Self {
            count,
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
}

#[cfg(test)]
mod tests {
    use super::{EggDraft, EggRecord};
    use crate::model::value::{derive_timestamp, CalendarDate, ClockTime};

    #[test]
    fn timestamp_comes_from_record_date_not_today() {
        let today = CalendarDate::from_ymd(2024, 3, 12).unwrap();
        let date = CalendarDate::from_ymd(2024, 3, 10).unwrap();
        let time = ClockTime::from_hm(8, 30).unwrap();
        let record = EggRecord::from_draft(7, EggDraft::new(5).on(date).at(time), today);
        assert_eq!(record.timestamp, derive_timestamp(date, Some(time)));
    }

    #[test]
    fn absent_time_is_persisted_as_empty_string() {
        let today = CalendarDate::from_ymd(2024, 3, 12).unwrap();
        let record = EggRecord::from_draft(7, EggDraft::new(2), today);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["time"], "");
        assert_eq!(json["date"], "2024-03-12");

        let back: EggRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn null_timestamp_is_rederived_from_date() {
        let record: EggRecord = serde_json::from_str(
            r#"{"id":3,"count":2,"date":"2024-03-10","time":"","notes":"","timestamp":null}"#,
        )
        .unwrap();
        let date = CalendarDate::from_ymd(2024, 3, 10).unwrap();
        assert_eq!(record.time, None);
        assert_eq!(record.timestamp, derive_timestamp(date, None));
    }
}
