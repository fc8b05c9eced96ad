//! Dashboard counters.

use crate::model::egg::EggRecord;
use crate::model::quail::{Health, Quail};
use crate::model::task::Task;
use crate::model::value::CalendarDate;

/// Counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_quails: usize,
    /// Sum of counts over egg records dated today.
    pub eggs_today: u64,
    /// Tasks dated today that are not completed.
    pub open_tasks_today: usize,
    pub healthy_quails: usize,
}

pub fn dashboard_summary(
    quails: &[Quail],
    eggs: &[EggRecord],
    tasks: &[Task],
    today: CalendarDate,
) -> DashboardSummary {
    DashboardSummary {
        total_quails: quails.len(),
        eggs_today: eggs
            .iter()
            .filter(|record| record.date == today)
            .map(|record| u64::from(record.count))
            .sum(),
        open_tasks_today: tasks
            .iter()
            .filter(|task| task.date == today && !task.completed)
            .count(),
        healthy_quails: quails
            .iter()
            .filter(|quail| quail.health == Health::Healthy)
            .count(),
    }
}
