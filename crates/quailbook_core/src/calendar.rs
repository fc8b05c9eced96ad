//! Monthly calendar navigation and the per-day task grid.
//!
//! # Responsibility
//! - Track the selected month/year and move it one month at a time.
//! - Count tasks per day of the selected month.
//!
//! # Invariants
//! - `month` is zero-based and always in `0..=11`.
//! - The cursor is view state only and is never persisted.

use crate::model::task::Task;
use crate::model::value::CalendarDate;
use chrono::Datelike;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Short weekday headers for a Sunday-first grid.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Selected month of the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    month: u32,
    year: i32,
}

impl CalendarCursor {
    /// Returns `None` when `month` is outside `0..=11`.
    pub fn new(month: u32, year: i32) -> Option<Self> {
        (month <= 11).then_some(Self { month, year })
    }

    /// Cursor positioned on the month containing `date`.
    pub fn containing(date: CalendarDate) -> Self {
        Self {
            month: date.month() - 1,
            year: date.year(),
        }
    }

    /// Zero-based month.
    pub fn month(self) -> u32 {
        self.month
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month_name(self) -> &'static str {
        MONTH_NAMES.get(self.month as usize).copied().unwrap_or("")
    }

    /// Previous month; January wraps to December of the previous year.
    pub fn prev(self) -> Self {
        if self.month == 0 {
            Self {
                month: 11,
                year: self.year - 1,
            }
        } else {
            Self {
                month: self.month - 1,
                year: self.year,
            }
        }
    }

    /// Next month; December wraps to January of the next year.
    pub fn next(self) -> Self {
        if self.month == 11 {
            Self {
                month: 0,
                year: self.year + 1,
            }
        } else {
            Self {
                month: self.month + 1,
                year: self.year,
            }
        }
    }

    fn first_day(self) -> Option<CalendarDate> {
        CalendarDate::from_ymd(self.year, self.month + 1, 1)
    }
}

/// One day cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub day: u32,
    pub date: CalendarDate,
    pub task_count: usize,
    pub is_today: bool,
}

impl CalendarDay {
    pub fn has_tasks(&self) -> bool {
        self.task_count > 0
    }
}

/// Grid data for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    pub cursor: CalendarCursor,
    /// Empty cells before day 1 in a Sunday-first week.
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    /// Header text, e.g. `March 2024`.
    pub fn title(&self) -> String {
        format!("{} {}", self.cursor.month_name(), self.cursor.year())
    }
}

/// Builds the grid for the month under `cursor`.
pub fn calendar_month(cursor: CalendarCursor, tasks: &[Task], today: CalendarDate) -> CalendarMonth {
    let Some(first) = cursor.first_day() else {
        return CalendarMonth {
            cursor,
            leading_blanks: 0,
            days: Vec::new(),
        };
    };

    let days = first
        .naive()
        .iter_days()
        .take_while(|date| date.month() == first.month())
        .map(|naive| {
            let date = CalendarDate::new(naive);
            CalendarDay {
                day: naive.day(),
                date,
                task_count: tasks.iter().filter(|task| task.date == date).count(),
                is_today: date == today,
            }
        })
        .collect();

    CalendarMonth {
        cursor,
        leading_blanks: first.naive().weekday().num_days_from_sunday(),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::{calendar_month, CalendarCursor};
    use crate::model::task::{Task, TaskDraft};
    use crate::model::value::CalendarDate;

    #[test]
    fn prev_from_january_wraps_to_december_of_previous_year() {
        let cursor = CalendarCursor::new(0, 2024).unwrap().prev();
        assert_eq!((cursor.month(), cursor.year()), (11, 2023));
    }

    #[test]
    fn next_from_december_wraps_to_january_of_next_year() {
        let cursor = CalendarCursor::new(11, 2024).unwrap().next();
        assert_eq!((cursor.month(), cursor.year()), (0, 2025));
    }

    #[test]
    fn other_transitions_only_change_month() {
        let cursor = CalendarCursor::new(5, 2024).unwrap();
        assert_eq!(cursor.next(), CalendarCursor::new(6, 2024).unwrap());
        assert_eq!(cursor.prev(), CalendarCursor::new(4, 2024).unwrap());
    }

    #[test]
    fn out_of_range_month_is_rejected() {
        assert!(CalendarCursor::new(12, 2024).is_none());
    }

    #[test]
    fn month_grid_counts_tasks_per_day() {
        let today = CalendarDate::from_ymd(2024, 2, 10).unwrap();
        let on = |day| CalendarDate::from_ymd(2024, 2, day).unwrap();
        let tasks: Vec<Task> = [on(3), on(3), on(29)]
            .into_iter()
            .enumerate()
            .map(|(index, date)| Task::from_draft(index as i64, TaskDraft::new("t").on(date), today))
            .collect();

        let month = calendar_month(CalendarCursor::containing(today), &tasks, today);
        assert_eq!(month.title(), "February 2024");
        assert_eq!(month.days.len(), 29);
        // 2024-02-01 is a Thursday.
        assert_eq!(month.leading_blanks, 4);
        assert_eq!(month.days[2].task_count, 2);
        assert!(month.days[28].has_tasks());
        assert!(!month.days[0].has_tasks());
        assert!(month.days[9].is_today);
        assert_eq!(month.days.iter().filter(|day| day.is_today).count(), 1);
    }
}
