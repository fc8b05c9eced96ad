//! Record id generation.
//!
//! Ids are creation instants in epoch milliseconds. Two records created in
//! the same millisecond share an id; callers accept that.

use crate::model::RecordId;
use mockable::Clock;
use std::sync::Arc;

/// Source of ids for newly created records.
pub trait IdSource {
    fn next_id(&mut self) -> RecordId;
}

/// Derives ids from the UTC wall clock.
pub struct ClockIdSource {
    clock: Arc<dyn Clock>,
}

impl ClockIdSource {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl IdSource for ClockIdSource {
    fn next_id(&mut self) -> RecordId {
        self.clock.utc().timestamp_millis()
    }
}
