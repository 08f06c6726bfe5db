use crate::app::AppState;
use crate::domain::UiMode;
use crate::persistence::KeyValueStore;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the user asked to quit.
pub fn handle_key<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> bool {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_input_form_mode(app, key),
        UiMode::Notice => {
            // Any key dismisses the notice
            app.dismiss_notice();
            false
        }
        UiMode::DayChanged => matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> bool {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Start timer
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => app.start_selected(),

        // Mark completed
        KeyCode::Char('d') | KeyCode::Char('D') => app.complete_selected(),

        // Reset elapsed time
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_selected(),

        // Delete task
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => app.delete_selected(),

        // Add task
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_task(),

        // Switch daily budget
        KeyCode::Char('b') | KeyCode::Char('B') => app.toggle_budget(),

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        _ => {}
    }
    false
}

/// Handle keys in input form mode
fn handle_input_form_mode<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_input_form(),
        KeyCode::Esc => app.cancel_input_form(),
        // Switch between name and hours
        KeyCode::Tab | KeyCode::BackTab => app.input_form_toggle_field(),
        KeyCode::Backspace => app.input_form_backspace(),
        KeyCode::Char(c) => app.input_form_add_char(c),
        _ => {}
    }
    false
}
