//! Task lifecycle transitions.
//!
//! Every transition takes the current snapshot and returns the next one; the
//! input slice is never mutated. Transitions naming an unknown id return an
//! unchanged copy.

use super::enums::TaskStatus;
use super::task::Task;
use chrono::NaiveDate;
use uuid::Uuid;

/// The task currently accruing time, if any
pub fn active_task(tasks: &[Task]) -> Option<&Task> {
    tasks.iter().find(|t| t.is_active())
}

fn contains(tasks: &[Task], id: Uuid) -> bool {
    tasks.iter().any(|t| t.id == id)
}

/// Carry open tasks from earlier days forward to `today`, as pending
pub fn rollover(tasks: &[Task], today: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.status.is_open() && task.date < today {
                Task {
                    date: today,
                    status: TaskStatus::Pending,
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}

/// Append a new task
pub fn add(tasks: &[Task], task: Task) -> Vec<Task> {
    let mut next = tasks.to_vec();
    next.push(task);
    next
}

/// Make `id` the active task, demoting whichever task of `today` was active
pub fn start(tasks: &[Task], id: Uuid, today: NaiveDate, now_millis: i64) -> Vec<Task> {
    if !contains(tasks, id) {
        return tasks.to_vec();
    }

    tasks
        .iter()
        .map(|task| {
            if task.id == id {
                Task {
                    status: TaskStatus::Active,
                    start_time: Some(now_millis),
                    ..task.clone()
                }
            } else if task.is_active() && task.date == today {
                Task {
                    status: TaskStatus::Pending,
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}

/// Mark `id` completed, whatever its prior state
pub fn complete(tasks: &[Task], id: Uuid) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id == id {
                Task {
                    status: TaskStatus::Completed,
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}

/// Remove `id` from the collection
pub fn delete(tasks: &[Task], id: Uuid) -> Vec<Task> {
    tasks.iter().filter(|t| t.id != id).cloned().collect()
}

/// Zero the timer of `id` and put it back to pending, whatever its prior state
pub fn reset_time(tasks: &[Task], id: Uuid) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id == id {
                Task {
                    elapsed_seconds: 0,
                    status: TaskStatus::Pending,
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}

/// Credit `seconds` to `id`, but only while it is still the active task
pub fn tick(tasks: &[Task], id: Uuid, seconds: u64) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id == id && task.is_active() {
                Task {
                    elapsed_seconds: task.elapsed_seconds.saturating_add(seconds),
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 1, 2)
    }

    fn task(name: &str, hours: f64) -> Task {
        Task::new(name, hours, today()).unwrap()
    }

    fn active_count(tasks: &[Task]) -> usize {
        tasks.iter().filter(|t| t.is_active()).count()
    }

    fn find(tasks: &[Task], id: Uuid) -> &Task {
        tasks.iter().find(|t| t.id == id).unwrap()
    }

    #[test]
    fn test_rollover_moves_open_tasks_forward() {
        let mut stale_active = task("Stale active", 1.0);
        stale_active.date = date(2024, 1, 1);
        stale_active.status = TaskStatus::Active;
        stale_active.elapsed_seconds = 120;

        let mut stale_done = task("Stale done", 1.0);
        stale_done.date = date(2023, 12, 31);
        stale_done.status = TaskStatus::Completed;

        let current = task("Current", 2.0);

        let rolled = rollover(&[stale_active.clone(), stale_done.clone(), current.clone()], today());

        assert_eq!(rolled[0].date, today());
        assert_eq!(rolled[0].status, TaskStatus::Pending);
        assert_eq!(rolled[0].elapsed_seconds, 120);
        assert_eq!(rolled[1], stale_done);
        assert_eq!(rolled[2], current);
    }

    #[test]
    fn test_rollover_leaves_future_tasks_alone() {
        let mut future = task("Future", 1.0);
        future.date = date(2024, 1, 5);
        let rolled = rollover(&[future.clone()], today());
        assert_eq!(rolled, vec![future]);
    }

    #[test]
    fn test_rollover_is_idempotent() {
        let mut a = task("A", 1.0);
        a.date = date(2023, 6, 1);
        a.status = TaskStatus::Active;
        let mut b = task("B", 1.0);
        b.date = date(2023, 6, 1);
        b.status = TaskStatus::Completed;
        let c = task("C", 1.0);

        let once = rollover(&[a, b, c], today());
        let twice = rollover(&once, today());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_start_keeps_single_active() {
        let tasks = vec![task("A", 1.0), task("B", 1.0), task("C", 1.0)];
        let ids: Vec<Uuid> = tasks.iter().map(|t| t.id).collect();

        let mut current = tasks;
        for id in [ids[0], ids[1], ids[2], ids[0], ids[0], ids[2]] {
            current = start(&current, id, today(), 1_000);
            assert_eq!(active_count(&current), 1);
            assert_eq!(active_task(&current).map(|t| t.id), Some(id));
        }
    }

    #[test]
    fn test_start_demotes_without_resetting_elapsed() {
        let a = task("A", 1.0);
        let b = task("B", 1.0);
        let (a_id, b_id) = (a.id, b.id);

        let tasks = start(&[a, b], a_id, today(), 1_000);
        let tasks = tick(&tasks, a_id, 7);
        let tasks = start(&tasks, b_id, today(), 2_000);

        assert_eq!(find(&tasks, a_id).status, TaskStatus::Pending);
        assert_eq!(find(&tasks, a_id).elapsed_seconds, 7);
        assert_eq!(find(&tasks, b_id).status, TaskStatus::Active);
        assert_eq!(find(&tasks, b_id).start_time, Some(2_000));
    }

    #[test]
    fn test_start_ignores_active_task_of_other_day() {
        let mut old = task("Old", 1.0);
        old.date = date(2024, 1, 1);
        old.status = TaskStatus::Active;
        let fresh = task("Fresh", 1.0);
        let (old_id, fresh_id) = (old.id, fresh.id);

        let tasks = start(&[old, fresh], fresh_id, today(), 1_000);
        assert_eq!(find(&tasks, old_id).status, TaskStatus::Active);
        assert_eq!(find(&tasks, fresh_id).status, TaskStatus::Active);
    }

    #[test]
    fn test_start_unknown_id_is_noop() {
        let a = task("A", 1.0);
        let a_id = a.id;
        let tasks = start(&[a], a_id, today(), 1_000);

        let after = start(&tasks, Uuid::new_v4(), today(), 2_000);
        assert_eq!(after, tasks);
    }

    #[test]
    fn test_complete_from_any_state() {
        let pending = task("Pending", 1.0);
        let mut active = task("Active", 1.0);
        active.status = TaskStatus::Active;
        let (p_id, a_id) = (pending.id, active.id);

        let tasks = complete(&[pending, active], p_id);
        let tasks = complete(&tasks, a_id);

        assert!(find(&tasks, p_id).is_completed());
        assert!(find(&tasks, a_id).is_completed());
        assert!(active_task(&tasks).is_none());
    }

    #[test]
    fn test_delete_clears_active() {
        let a = task("A", 1.0);
        let a_id = a.id;
        let tasks = start(&[a, task("B", 1.0)], a_id, today(), 0);

        let tasks = delete(&tasks, a_id);
        assert_eq!(tasks.len(), 1);
        assert!(active_task(&tasks).is_none());

        let unchanged = delete(&tasks, Uuid::new_v4());
        assert_eq!(unchanged, tasks);
    }

    #[test]
    fn test_reset_time_from_every_state() {
        for status in [TaskStatus::Pending, TaskStatus::Active, TaskStatus::Completed] {
            let mut t = task("A", 1.0);
            t.status = status;
            t.elapsed_seconds = 99;
            let id = t.id;

            let tasks = reset_time(&[t], id);
            assert_eq!(tasks[0].elapsed_seconds, 0);
            assert_eq!(tasks[0].status, TaskStatus::Pending);
        }
    }

    #[test]
    fn test_tick_only_credits_active_task() {
        let a = task("A", 1.0);
        let b = task("B", 1.0);
        let (a_id, b_id) = (a.id, b.id);

        let tasks = start(&[a, b], a_id, today(), 0);
        let tasks = tick(&tasks, a_id, 3);
        let tasks = start(&tasks, b_id, today(), 0);

        // A stale tick aimed at A after the switch must not land
        let tasks = tick(&tasks, a_id, 10);
        let tasks = tick(&tasks, b_id, 2);

        assert_eq!(find(&tasks, a_id).elapsed_seconds, 3);
        assert_eq!(find(&tasks, b_id).elapsed_seconds, 2);
    }

    #[test]
    fn test_tick_leaves_completed_frozen() {
        let a = task("A", 1.0);
        let a_id = a.id;
        let tasks = start(&[a], a_id, today(), 0);
        let tasks = tick(&tasks, a_id, 5);
        let tasks = complete(&tasks, a_id);
        let tasks = tick(&tasks, a_id, 5);

        assert_eq!(tasks[0].elapsed_seconds, 5);
        assert_eq!(tasks[0].date, today());
    }
}
