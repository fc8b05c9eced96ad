#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use quailbook_core::{
    CalendarDate, ClockTime, IdSource, KeyValueStore, MemoryKvStore, RecordId, RepoError,
    RepoResult,
};
use std::cell::Cell;
use std::sync::Arc;

/// Clock frozen at a fixed local instant.
pub struct FixedClock {
    now: DateTime<Local>,
}

impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Arc<dyn Clock> {
        let now = Local
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .earliest()
            .unwrap();
        Arc::new(Self { now })
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.with_timezone(&Utc)
    }
}

/// Ids 1, 2, 3, ...
pub struct SequentialIds {
    next: RecordId,
}

impl SequentialIds {
    pub fn boxed() -> Box<dyn IdSource> {
        Box::new(Self { next: 1 })
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> RecordId {
        let id = self.next;
        self.next += 1;
        id
    }
}

pub fn date(text: &str) -> CalendarDate {
    text.parse().unwrap()
}

pub fn time(text: &str) -> ClockTime {
    text.parse().unwrap()
}

/// In-memory store whose writes can be switched to fail.
#[derive(Default)]
pub struct FailingKvStore {
    inner: MemoryKvStore,
    fail_writes: Cell<bool>,
}

impl FailingKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self) {
        self.fail_writes.set(true);
    }

    fn check_writable(&self) -> RepoResult<()> {
        if self.fail_writes.get() {
            return Err(RepoError::from(rusqlite::Error::InvalidQuery));
        }
        Ok(())
    }
}

impl KeyValueStore for FailingKvStore {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        self.check_writable()?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> RepoResult<()> {
        self.check_writable()?;
        self.inner.remove(key)
    }
}
