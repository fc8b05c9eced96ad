//! Task lists.

use crate::model::task::Task;
use crate::model::value::CalendarDate;

/// Tasks dated `day`, earliest time first; tasks without a time come first.
pub fn tasks_for_day(tasks: &[Task], day: CalendarDate) -> Vec<&Task> {
    let mut selected: Vec<&Task> = tasks.iter().filter(|task| task.date == day).collect();
    selected.sort_by_key(|task| task.time);
    selected
}
