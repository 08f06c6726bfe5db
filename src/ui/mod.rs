pub mod budget_pane;
pub mod header_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod progress_pane;
pub mod styles;

use crate::app::AppState;
use crate::domain::UiMode;
use crate::persistence::KeyValueStore;
use budget_pane::render_budget_pane;
use header_pane::render_header_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::{render_day_changed_modal, render_notice_modal};
use progress_pane::render_progress_pane;
use ratatui::Frame;

/// Main render function - draws the entire UI
pub fn render<S: KeyValueStore>(f: &mut Frame, app: &AppState<S>) {
    let size = f.size();
    let layout = create_layout(size);
    let summary = app.store.summary();

    render_keybindings(f, layout.keybindings_area);
    render_header_pane(f, &summary, app.store.today(), layout.header_area);
    render_list_pane(f, &app.visible_tasks(), app.selected_index, layout.list_area);
    render_budget_pane(f, app.store.daily_budget(), layout.budget_area);
    render_progress_pane(f, &summary, layout.progress_area);

    // Day changed modal takes precedence over everything else
    if app.ui_mode == UiMode::DayChanged {
        render_day_changed_modal(f, app.store.today(), size);
        return;
    }

    if let Some(form) = &app.input_form {
        render_input_form(f, form, size);
    }

    // Notices stack on top of the form
    if let Some(message) = &app.notice {
        render_notice_modal(f, message, size);
    }
}
