//! Egg production views: the 7-day histogram and recent history.

use crate::model::egg::EggRecord;
use crate::model::value::CalendarDate;

/// Number of days covered by the histogram, ending today.
pub const HISTOGRAM_DAYS: u64 = 7;
/// Entries shown in the egg history list.
pub const RECENT_EGGS_LIMIT: usize = 10;
/// Lowest bar height in percent, so empty days stay visible.
pub const MIN_BAR_HEIGHT_PERCENT: f64 = 10.0;

/// Egg total for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBucket {
    pub date: CalendarDate,
    pub count: u64,
}

/// Seven consecutive day buckets, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EggHistogram {
    pub buckets: Vec<DayBucket>,
    /// Largest bucket count, never below 1.
    pub max_count: u64,
}

impl EggHistogram {
    /// Display height of a bar relative to the busiest day.
    pub fn bar_height_percent(&self, bucket: &DayBucket) -> f64 {
        let relative = bucket.count as f64 / self.max_count as f64 * 100.0;
        relative.max(MIN_BAR_HEIGHT_PERCENT)
    }

    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|bucket| bucket.count).sum()
    }
}

/// Sums egg counts for today and the six preceding days.
pub fn egg_histogram(eggs: &[EggRecord], today: CalendarDate) -> EggHistogram {
    let buckets: Vec<DayBucket> = (0..HISTOGRAM_DAYS)
        .rev()
        .map(|offset| {
            let date = today.days_before(offset);
            let count = eggs
                .iter()
                .filter(|record| record.date == date)
                .map(|record| u64::from(record.count))
                .sum();
            DayBucket { date, count }
        })
        .collect();
    let max_count = buckets
        .iter()
        .map(|bucket| bucket.count)
        .max()
        .unwrap_or(0)
        .max(1);

    EggHistogram { buckets, max_count }
}

/// Most recent egg records by descending timestamp.
pub fn recent_eggs(eggs: &[EggRecord]) -> Vec<&EggRecord> {
    let mut sorted: Vec<&EggRecord> = eggs.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.truncate(RECENT_EGGS_LIMIT);
    sorted
}
