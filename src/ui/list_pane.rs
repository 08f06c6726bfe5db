use crate::domain::{status_badge, CompletionNote, Task, TaskStatus};
use crate::ui::styles::{
    border_style, default_style, done_style, early_style, late_style, over_estimate_style,
    pending_style, running_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Render today's task list
pub fn render_list_pane(f: &mut Frame, tasks: &[&Task], selected_index: usize, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(format!(" Today's Tasks ({}) ", tasks.len()), title_style()));

    if tasks.is_empty() {
        let placeholder = Paragraph::new(vec![
            Line::raw(""),
            Line::raw("  No tasks for today yet. Press [a] to add one."),
        ])
        .style(pending_style())
        .wrap(Wrap { trim: false })
        .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| ListItem::new(create_task_line(task)))
        .collect();

    let list = List::new(items)
        .block(block)
        .style(default_style())
        .highlight_style(selected_style());

    // Stateful so the list scrolls to keep the selection visible
    let mut state = ListState::default().with_selected(Some(selected_index));
    f.render_stateful_widget(list, area, &mut state);
}

/// Create a single line for a task
/// Format: ⏱ RUNNING  Write proposal  est 2h 30m  00:41:07  early 1h 49m
fn create_task_line(task: &Task) -> Line<'static> {
    let mut spans = Vec::new();

    let badge_style = match task.status {
        TaskStatus::Active => running_style(),
        TaskStatus::Completed => done_style(),
        TaskStatus::Pending => pending_style(),
    };
    spans.push(Span::styled(format!("{:<10}", status_badge(task.status)), badge_style));
    spans.push(Span::raw(" "));

    spans.push(Span::raw(task.name.clone()));
    spans.push(Span::raw("  "));

    spans.push(Span::raw(format!("est {}  ", task.estimate_formatted())));

    let elapsed_style = if task.is_overdue() {
        over_estimate_style()
    } else {
        default_style()
    };
    spans.push(Span::styled(task.elapsed_formatted(), elapsed_style));

    if let Some(note) = task.completion_note() {
        let note_style = match note {
            CompletionNote::OnTime => pending_style(),
            CompletionNote::Early(_) => early_style(),
            CompletionNote::Late(_) => late_style(),
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(note.to_string(), note_style));
    }

    Line::from(spans)
}
