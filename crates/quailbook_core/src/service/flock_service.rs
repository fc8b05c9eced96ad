//! Flock domain store.
//!
//! # Responsibility
//! - Hold the quail, egg record and task collections in creation order.
//! - Persist the affected collection in full before each mutation returns.
//! - Hold the calendar cursor (view state, never persisted).
//!
//! # Invariants
//! - Collections are never absent; bad stored data loads as empty.
//! - Update/delete of an unknown id is a silent no-op.
//! - A failed save leaves the in-memory collection unchanged.

use crate::aggregate::{
    dashboard_summary, egg_histogram, recent_activity, recent_eggs, tasks_for_day,
    ActivityEntry, DashboardSummary, EggHistogram,
};
use crate::calendar::{calendar_month, CalendarCursor, CalendarMonth};
use crate::model::egg::{EggDraft, EggRecord};
use crate::model::quail::{Quail, QuailDraft, QuailPatch};
use crate::model::task::{Task, TaskDraft};
use crate::model::value::CalendarDate;
use crate::model::RecordId;
use crate::repo::collection::{load_collection, save_collection, EGGS_KEY, QUAILS_KEY, TASKS_KEY};
use crate::repo::kv_repo::{KeyValueStore, RepoResult};
use crate::service::ids::{ClockIdSource, IdSource};
use log::{error, info};
use mockable::Clock;
use std::sync::Arc;

/// Question asked before a quail is deleted.
pub const DELETE_QUAIL_PROMPT: &str = "Delete this quail?";

/// Yes/no confirmation capability provided by the presentation layer.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, question: &str) -> bool {
        self(question)
    }
}

/// In-memory flock state backed by a key-value store.
pub struct FlockStore<S: KeyValueStore> {
    kv: S,
    clock: Arc<dyn Clock>,
    ids: Box<dyn IdSource>,
    quails: Vec<Quail>,
    eggs: Vec<EggRecord>,
    tasks: Vec<Task>,
    calendar: CalendarCursor,
}

impl<S: KeyValueStore> FlockStore<S> {
    /// Loads all collections, deriving record ids from `clock`.
    pub fn open(kv: S, clock: Arc<dyn Clock>) -> RepoResult<Self> {
        let ids = Box::new(ClockIdSource::new(Arc::clone(&clock)));
        Self::open_with_ids(kv, clock, ids)
    }

    /// Loads all collections with a caller-provided id source.
    pub fn open_with_ids(
        kv: S,
        clock: Arc<dyn Clock>,
        ids: Box<dyn IdSource>,
    ) -> RepoResult<Self> {
        let quails = load_collection(&kv, QUAILS_KEY)?;
        let eggs = load_collection(&kv, EGGS_KEY)?;
        let tasks = load_collection(&kv, TASKS_KEY)?;
        let today = CalendarDate::new(clock.local().date_naive());

        let store = Self {
            kv,
            clock,
            ids,
            quails,
            eggs,
            tasks,
            calendar: CalendarCursor::containing(today),
        };
        info!(
            "event=store_open module=service status=ok quails={} eggs={} tasks={}",
            store.quails.len(),
            store.eggs.len(),
            store.tasks.len()
        );
        Ok(store)
    }

    /// Current local calendar date according to the injected clock.
    pub fn today(&self) -> CalendarDate {
        CalendarDate::new(self.clock.local().date_naive())
    }

    pub fn quails(&self) -> &[Quail] {
        &self.quails
    }

    pub fn quail(&self, id: RecordId) -> Option<&Quail> {
        self.quails.iter().find(|quail| quail.id == id)
    }

    pub fn eggs(&self) -> &[EggRecord] {
        &self.eggs
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a new quail and persists the quail collection.
    pub fn create_quail(&mut self, draft: QuailDraft) -> RepoResult<Quail> {
        let quail = Quail::from_draft(self.ids.next_id(), draft, self.today());
        self.quails.push(quail.clone());
        if let Err(err) = save_collection(&self.kv, QUAILS_KEY, &self.quails) {
            self.quails.pop();
            error!("event=quail_create module=service status=error error={err}");
            return Err(err);
        }
        info!("event=quail_create module=service status=ok id={}", quail.id);
        Ok(quail)
    }

    /// Merges `patch` over the quail with `id`.
    ///
    /// Returns `Ok(None)` without touching storage when `id` is unknown.
    pub fn update_quail(&mut self, id: RecordId, patch: QuailPatch) -> RepoResult<Option<Quail>> {
        let Some(index) = self.quails.iter().position(|quail| quail.id == id) else {
            info!("event=quail_update module=service status=skipped reason=not_found id={id}");
            return Ok(None);
        };

        let previous = self.quails[index].clone();
        self.quails[index].apply(patch);
        if let Err(err) = save_collection(&self.kv, QUAILS_KEY, &self.quails) {
            self.quails[index] = previous;
            error!("event=quail_update module=service status=error id={id} error={err}");
            return Err(err);
        }
        info!("event=quail_update module=service status=ok id={id}");
        Ok(Some(self.quails[index].clone()))
    }

    /// Removes the quail with `id` after a positive confirmation.
    ///
    /// Returns whether a record was removed. Unknown ids do not prompt.
    pub fn delete_quail(&mut self, id: RecordId, confirm: &mut impl Confirm) -> RepoResult<bool> {
        let Some(index) = self.quails.iter().position(|quail| quail.id == id) else {
            info!("event=quail_delete module=service status=skipped reason=not_found id={id}");
            return Ok(false);
        };
        if !confirm.confirm(DELETE_QUAIL_PROMPT) {
            info!("event=quail_delete module=service status=skipped reason=declined id={id}");
            return Ok(false);
        }

        let removed = self.quails.remove(index);
        if let Err(err) = save_collection(&self.kv, QUAILS_KEY, &self.quails) {
            self.quails.insert(index, removed);
            error!("event=quail_delete module=service status=error id={id} error={err}");
            return Err(err);
        }
        info!("event=quail_delete module=service status=ok id={id}");
        Ok(true)
    }

    /// Appends an egg record and persists the egg collection.
    pub fn create_egg_record(&mut self, draft: EggDraft) -> RepoResult<EggRecord> {
        let record = EggRecord::from_draft(self.ids.next_id(), draft, self.today());
        self.eggs.push(record.clone());
        if let Err(err) = save_collection(&self.kv, EGGS_KEY, &self.eggs) {
            self.eggs.pop();
            error!("event=eggs_create module=service status=error error={err}");
            return Err(err);
        }
        info!(
            "event=eggs_create module=service status=ok id={} count={}",
            record.id, record.count
        );
        Ok(record)
    }

    /// Appends a task and persists the task collection.
    pub fn create_task(&mut self, draft: TaskDraft) -> RepoResult<Task> {
        let task = Task::from_draft(self.ids.next_id(), draft, self.today());
        self.tasks.push(task.clone());
        if let Err(err) = save_collection(&self.kv, TASKS_KEY, &self.tasks) {
            self.tasks.pop();
            error!("event=task_create module=service status=error error={err}");
            return Err(err);
        }
        info!("event=task_create module=service status=ok id={}", task.id);
        Ok(task)
    }

    pub fn dashboard(&self) -> DashboardSummary {
        dashboard_summary(&self.quails, &self.eggs, &self.tasks, self.today())
    }

    pub fn egg_histogram(&self) -> EggHistogram {
        egg_histogram(&self.eggs, self.today())
    }

    pub fn recent_eggs(&self) -> Vec<&EggRecord> {
        recent_eggs(&self.eggs)
    }

    pub fn today_tasks(&self) -> Vec<&Task> {
        tasks_for_day(&self.tasks, self.today())
    }

    pub fn recent_activity(&self) -> Vec<ActivityEntry> {
        recent_activity(&self.quails, &self.eggs, &self.tasks)
    }

    pub fn calendar(&self) -> CalendarCursor {
        self.calendar
    }

    /// Grid for the currently selected month.
    pub fn calendar_month(&self) -> CalendarMonth {
        calendar_month(self.calendar, &self.tasks, self.today())
    }

    /// Moves the calendar one month back and returns the new grid.
    pub fn calendar_prev(&mut self) -> CalendarMonth {
        self.calendar = self.calendar.prev();
        self.calendar_month()
    }

    /// Moves the calendar one month forward and returns the new grid.
    pub fn calendar_next(&mut self) -> CalendarMonth {
        self.calendar = self.calendar.next();
        self.calendar_month()
    }
}
