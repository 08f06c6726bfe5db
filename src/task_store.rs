use crate::clock::Clock;
use crate::domain::{compute_summary, lifecycle, todays_tasks, DailySummary, Task};
use crate::error::TaskError;
use crate::persistence::{load_budget, load_tasks, save_slot, KeyValueStore, BUDGET_KEY, TASKS_KEY};
use anyhow::Result;
use chrono::NaiveDate;
use uuid::Uuid;

/// Owns every task and the daily budget.
///
/// All task mutations go through [`TaskStore::update`], which swaps in a new
/// snapshot and bumps the revision. Writes are deferred: a mutation marks its
/// slot dirty and [`TaskStore::flush`] persists it later.
pub struct TaskStore<S: KeyValueStore> {
    backend: S,
    clock: Box<dyn Clock>,
    tasks: Vec<Task>,
    daily_budget: f64,
    today: NaiveDate,
    revision: u64,
    tasks_dirty: bool,
    budget_dirty: bool,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Load both slots and apply the rollover rule for today
    pub fn load(backend: S, clock: Box<dyn Clock>) -> Self {
        let stored = load_tasks(&backend);
        let daily_budget = load_budget(&backend);
        let today = clock.today();

        let tasks = lifecycle::rollover(&stored, today);
        let rolled = tasks
            .iter()
            .zip(&stored)
            .filter(|(after, before)| after != before)
            .count();
        if rolled > 0 {
            tracing::info!(rolled, %today, "carried unfinished tasks over to today");
        }

        tracing::debug!(tasks = tasks.len(), daily_budget, "task store loaded");

        Self {
            backend,
            clock,
            tasks,
            daily_budget,
            today,
            revision: 0,
            tasks_dirty: rolled > 0,
            budget_dirty: false,
        }
    }

    #[cfg(test)]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn todays_tasks(&self) -> Vec<&Task> {
        todays_tasks(&self.tasks, self.today)
    }

    pub fn summary(&self) -> DailySummary {
        compute_summary(&self.tasks, self.today, self.daily_budget)
    }

    pub fn active_task(&self) -> Option<&Task> {
        lifecycle::active_task(&self.tasks)
    }

    pub fn daily_budget(&self) -> f64 {
        self.daily_budget
    }

    /// The day rollover ran for
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Bumped on every snapshot change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the wall-clock date has moved past the day this store was loaded for
    pub fn has_day_changed(&self) -> bool {
        self.clock.today() != self.today
    }

    /// Apply a transition; returns whether the snapshot changed
    fn update(&mut self, transition: impl FnOnce(&[Task]) -> Vec<Task>) -> bool {
        let next = transition(&self.tasks);
        if next == self.tasks {
            return false;
        }
        self.tasks = next;
        self.revision += 1;
        self.tasks_dirty = true;
        true
    }

    /// Create a task for today
    pub fn add(&mut self, name: &str, hours: f64) -> Result<Uuid, TaskError> {
        let task = Task::new(name, hours, self.today).map_err(|e| {
            tracing::warn!(error = %e, "rejected new task");
            e
        })?;
        let id = task.id;
        tracing::debug!(task = %id, name = %task.name, hours, "task added");
        self.update(|tasks| lifecycle::add(tasks, task));
        Ok(id)
    }

    pub fn start(&mut self, id: Uuid) {
        let (today, now) = (self.today, self.clock.now().timestamp_millis());
        if self.update(|tasks| lifecycle::start(tasks, id, today, now)) {
            tracing::debug!(task = %id, "task started");
        }
    }

    pub fn complete(&mut self, id: Uuid) {
        if self.update(|tasks| lifecycle::complete(tasks, id)) {
            tracing::debug!(task = %id, "task completed");
        }
    }

    pub fn delete(&mut self, id: Uuid) {
        if self.update(|tasks| lifecycle::delete(tasks, id)) {
            tracing::debug!(task = %id, "task deleted");
        }
    }

    pub fn reset_time(&mut self, id: Uuid) {
        if self.update(|tasks| lifecycle::reset_time(tasks, id)) {
            tracing::debug!(task = %id, "task timer reset");
        }
    }

    /// Credit elapsed seconds to `id` if it is still active
    pub fn tick(&mut self, id: Uuid, seconds: u64) {
        self.update(|tasks| lifecycle::tick(tasks, id, seconds));
    }

    /// Choose a new daily budget; negative or non-finite values are ignored
    pub fn set_budget(&mut self, budget: f64) {
        if !budget.is_finite() || budget < 0.0 {
            tracing::warn!(budget, "ignoring invalid budget");
            return;
        }
        if budget != self.daily_budget {
            self.daily_budget = budget;
            self.budget_dirty = true;
            tracing::debug!(budget, "daily budget changed");
        }
    }

    /// Whether a mutation is still waiting to be written
    pub fn has_pending_writes(&self) -> bool {
        self.tasks_dirty || self.budget_dirty
    }

    /// Write every dirty slot. A slot that fails stays dirty for the next flush.
    pub fn flush(&mut self) -> Result<()> {
        if self.tasks_dirty {
            save_slot(&mut self.backend, TASKS_KEY, &self.tasks)?;
            self.tasks_dirty = false;
        }
        if self.budget_dirty {
            save_slot(&mut self.backend, BUDGET_KEY, &self.daily_budget)?;
            self.budget_dirty = false;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    #[cfg(test)]
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }
}
