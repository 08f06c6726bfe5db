use crate::domain::{parse_hours, Task, UiMode};
use crate::persistence::{KeyValueStore, BUDGET_OPTIONS};
use crate::task_store::TaskStore;
use crate::ticker::Ticker;
use std::time::Instant;
use uuid::Uuid;

/// Which field of the add form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Hours,
}

/// Input form state for adding tasks
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub name: String,
    pub hours: String,
    pub editing_field: FormField,
}

impl InputFormState {
    fn new() -> Self {
        Self {
            name: String::new(),
            hours: String::new(),
            editing_field: FormField::Name,
        }
    }

    fn current_field_mut(&mut self) -> &mut String {
        match self.editing_field {
            FormField::Name => &mut self.name,
            FormField::Hours => &mut self.hours,
        }
    }
}

/// Main application state
pub struct AppState<S: KeyValueStore> {
    pub store: TaskStore<S>,
    pub ticker: Ticker,
    pub ui_mode: UiMode,
    pub selected_index: usize,
    pub input_form: Option<InputFormState>,
    /// Warning shown to the user until dismissed
    pub notice: Option<String>,
    /// Whether the last flush failed (to log the failure only once)
    persist_failing: bool,
}

impl<S: KeyValueStore> AppState<S> {
    pub fn new(store: TaskStore<S>) -> Self {
        let mut app = Self {
            store,
            ticker: Ticker::default(),
            ui_mode: UiMode::Normal,
            selected_index: 0,
            input_form: None,
            notice: None,
            persist_failing: false,
        };
        app.sync_ticker(Instant::now());
        app
    }

    /// Today's tasks in display order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.store.todays_tasks()
    }

    /// Id of the selected row
    pub fn selected_id(&self) -> Option<Uuid> {
        self.visible_tasks().get(self.selected_index).map(|t| t.id)
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.selected_index).copied()
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        let count = self.visible_tasks().len();
        if self.selected_index + 1 < count {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the list after a removal
    fn clamp_selection(&mut self) {
        let count = self.visible_tasks().len();
        if count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }

    /// Start the selected task (offered for pending tasks only)
    pub fn start_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            if task.status.can_start() {
                let id = task.id;
                self.store.start(id);
                self.sync_ticker(Instant::now());
            }
        }
    }

    /// Complete the selected task (offered for the running task only)
    pub fn complete_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            if task.status.can_complete() {
                let id = task.id;
                self.store.complete(id);
                self.sync_ticker(Instant::now());
            }
        }
    }

    /// Reset the timer of the selected task (offered for unfinished tasks only)
    pub fn reset_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            if task.status.can_reset() {
                let id = task.id;
                self.store.reset_time(id);
                self.sync_ticker(Instant::now());
            }
        }
    }

    /// Delete the selected task
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.delete(id);
            self.clamp_selection();
            self.sync_ticker(Instant::now());
        }
    }

    /// Cycle the daily budget through the offered options
    pub fn toggle_budget(&mut self) {
        let current = self.store.daily_budget();
        let next = BUDGET_OPTIONS
            .iter()
            .position(|&b| b == current)
            .map(|i| BUDGET_OPTIONS[(i + 1) % BUDGET_OPTIONS.len()])
            .unwrap_or(BUDGET_OPTIONS[0]);
        self.store.set_budget(next);
    }

    /// Start adding a new task (opens input form)
    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState::new());
        self.ui_mode = UiMode::AddingTask;
    }

    /// Toggle between the name and hours fields
    pub fn input_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.editing_field = match form.editing_field {
                FormField::Name => FormField::Hours,
                FormField::Hours => FormField::Name,
            };
        }
    }

    /// Add character to input form (current field)
    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            form.current_field_mut().push(c);
        }
    }

    /// Backspace in input form (current field)
    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.current_field_mut().pop();
        }
    }

    /// Submit input form and create the task. Invalid input keeps the form
    /// open behind a notice.
    pub fn submit_input_form(&mut self) {
        let Some(form) = &self.input_form else {
            return;
        };

        let result = parse_hours(&form.hours).and_then(|hours| self.store.add(&form.name, hours));
        match result {
            Ok(_) => {
                self.input_form = None;
                self.ui_mode = UiMode::Normal;
                // Select the new task, which is always appended last
                self.selected_index = self.visible_tasks().len().saturating_sub(1);
            }
            Err(e) => self.show_notice(e.to_string()),
        }
    }

    /// Cancel input form
    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn show_notice(&mut self, message: String) {
        self.notice = Some(message);
        self.ui_mode = UiMode::Notice;
    }

    /// Close the notice, returning to the form if one is open
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.ui_mode = if self.input_form.is_some() {
            UiMode::AddingTask
        } else {
            UiMode::Normal
        };
    }

    /// Re-arm the ticker if the active task changed
    fn sync_ticker(&mut self, now: Instant) {
        let active = self.store.active_task().map(|t| t.id);
        self.ticker.sync(active, now);
    }

    /// Advance the active task's timer by one tick when one is due
    pub fn tick(&mut self, now: Instant) {
        if self.ui_mode == UiMode::DayChanged {
            return;
        }
        self.sync_ticker(now);
        if let Some(id) = self.ticker.due(now) {
            self.store.tick(id, 1);
        }
    }

    /// Switch to the restart prompt once midnight has passed
    pub fn check_day_changed(&mut self) -> bool {
        if self.ui_mode != UiMode::DayChanged && self.store.has_day_changed() {
            tracing::info!(day = %self.store.today(), "date changed while running");
            self.ticker.sync(None, Instant::now());
            self.ui_mode = UiMode::DayChanged;
        }
        self.ui_mode == UiMode::DayChanged
    }

    /// Persist pending mutations. Failures are logged and retried on the next call.
    pub fn save(&mut self) {
        if !self.store.has_pending_writes() {
            return;
        }
        match self.store.flush() {
            Ok(()) => {
                if self.persist_failing {
                    tracing::info!("persistence recovered");
                }
                self.persist_failing = false;
            }
            Err(e) => {
                if !self.persist_failing {
                    tracing::warn!(error = %format!("{:#}", e), "failed to save state");
                }
                self.persist_failing = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::domain::TaskStatus;
    use crate::persistence::store::MemoryStore;
    use std::time::Duration;

    fn create_test_app() -> AppState<MemoryStore> {
        let store = TaskStore::load(MemoryStore::default(), Box::new(FixedClock::at(2024, 1, 2)));
        let mut app = AppState::new(store);
        app.store.add("Task 1", 1.0).unwrap();
        app.store.add("Task 2", 2.0).unwrap();
        app
    }

    fn type_str(app: &mut AppState<MemoryStore>, s: &str) {
        for c in s.chars() {
            app.input_form_add_char(c);
        }
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert_eq!(app.visible_tasks().len(), 2);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.ticker.target(), None);
    }

    #[test]
    fn test_move_selection() {
        let mut app = create_test_app();
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);
        app.move_selection_up();
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_start_arms_ticker() {
        let mut app = create_test_app();
        app.start_selected();

        let task = app.selected_task().unwrap();
        assert_eq!(task.status, TaskStatus::Active);
        assert_eq!(app.ticker.target(), Some(task.id));
    }

    #[test]
    fn test_switching_tasks_isolates_ticks() {
        let mut app = create_test_app();

        app.start_selected();
        let first = app.selected_id().unwrap();
        let started_at = Instant::now();
        for s in 1..=3 {
            app.tick(started_at + Duration::from_secs(s));
        }
        let first_elapsed = app.selected_task().unwrap().elapsed_seconds;
        assert_eq!(first_elapsed, 3);

        app.move_selection_down();
        app.start_selected();
        let second = app.selected_id().unwrap();
        let switch_at = Instant::now();
        for s in 1..=4 {
            app.tick(switch_at + Duration::from_secs(s));
        }

        let tasks = app.visible_tasks();
        let a = tasks.iter().find(|t| t.id == first).unwrap();
        let b = tasks.iter().find(|t| t.id == second).unwrap();
        assert_eq!(a.status, TaskStatus::Pending);
        assert_eq!(a.elapsed_seconds, first_elapsed);
        assert_eq!(b.elapsed_seconds, 4);
    }

    #[test]
    fn test_guards_follow_status() {
        let mut app = create_test_app();

        // Pending tasks cannot be completed from the dashboard
        app.complete_selected();
        assert_eq!(app.selected_task().unwrap().status, TaskStatus::Pending);

        app.start_selected();
        app.complete_selected();
        assert_eq!(app.selected_task().unwrap().status, TaskStatus::Completed);
        assert_eq!(app.ticker.target(), None);

        // Completed tasks cannot be restarted or reset
        app.start_selected();
        app.reset_selected();
        assert_eq!(app.selected_task().unwrap().status, TaskStatus::Completed);
    }

    #[test]
    fn test_reset_stops_ticker() {
        let mut app = create_test_app();
        app.start_selected();
        app.tick(Instant::now() + Duration::from_secs(2));

        app.reset_selected();
        let task = app.selected_task().unwrap();
        assert_eq!(task.elapsed_seconds, 0);
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(app.ticker.target(), None);
    }

    #[test]
    fn test_delete_selected() {
        let mut app = create_test_app();
        app.move_selection_down();
        app.start_selected();
        app.delete_selected();

        assert_eq!(app.visible_tasks().len(), 1);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.ticker.target(), None);

        app.delete_selected();
        app.delete_selected();
        assert!(app.visible_tasks().is_empty());
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_add_task_through_form() {
        let mut app = create_test_app();
        app.start_add_task();
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        type_str(&mut app, "Review");
        app.input_form_toggle_field();
        type_str(&mut app, "1.55");
        app.input_form_backspace();
        app.submit_input_form();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
        assert_eq!(app.visible_tasks().len(), 3);
        let task = app.selected_task().unwrap();
        assert_eq!(task.name, "Review");
        assert_eq!(task.estimated_hours, 1.5);
    }

    #[test]
    fn test_invalid_form_shows_notice() {
        let mut app = create_test_app();
        app.start_add_task();
        app.input_form_toggle_field();
        type_str(&mut app, "2");
        app.submit_input_form();

        assert_eq!(app.ui_mode, UiMode::Notice);
        assert_eq!(app.notice.as_deref(), Some("Task name must not be empty"));
        assert_eq!(app.visible_tasks().len(), 2);

        app.dismiss_notice();
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert_eq!(app.input_form.as_ref().unwrap().hours, "2");

        app.input_form_toggle_field();
        type_str(&mut app, "Named");
        app.input_form_toggle_field();
        app.input_form_backspace();
        type_str(&mut app, "abc");
        app.submit_input_form();
        assert_eq!(app.ui_mode, UiMode::Notice);
        assert!(app.notice.as_ref().unwrap().contains("abc"));

        app.dismiss_notice();
        app.cancel_input_form();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.visible_tasks().len(), 2);
    }

    #[test]
    fn test_toggle_budget() {
        let mut app = create_test_app();
        assert_eq!(app.store.daily_budget(), 8.0);
        app.toggle_budget();
        assert_eq!(app.store.daily_budget(), 16.0);
        app.toggle_budget();
        assert_eq!(app.store.daily_budget(), 8.0);
    }

    #[test]
    fn test_save_survives_backend_failure() {
        let mut app = create_test_app();
        app.store.backend_mut().fail_writes = true;
        app.start_selected();
        app.save();
        app.save();
        assert!(app.store.has_pending_writes());
        assert_eq!(app.selected_task().unwrap().status, TaskStatus::Active);

        app.store.backend_mut().fail_writes = false;
        app.save();
        assert!(!app.store.has_pending_writes());
    }

    #[test]
    fn test_day_change_stops_ticker() {
        let clock = FixedClock::at(2024, 1, 2);
        let store = TaskStore::load(MemoryStore::default(), Box::new(clock.clone()));
        let mut app = AppState::new(store);
        app.store.add("A", 1.0).unwrap();
        app.start_selected();

        assert!(!app.check_day_changed());
        clock.set_day(2024, 1, 3);
        assert!(app.check_day_changed());
        assert_eq!(app.ui_mode, UiMode::DayChanged);
        assert_eq!(app.ticker.target(), None);

        app.tick(Instant::now() + Duration::from_secs(5));
        assert_eq!(app.ticker.target(), None);
        assert_eq!(app.selected_task().unwrap().elapsed_seconds, 0);
    }
}
