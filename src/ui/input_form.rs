use crate::app::{FormField, InputFormState};
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Label line plus "> value█" line for one form field
fn field_lines<'a>(label: &'a str, value: &'a str, editing: bool) -> [Line<'a>; 2] {
    let label_line = if editing {
        Line::raw(format!("{} (editing)", label))
    } else {
        Line::raw(label)
    };
    let value_line = Line::from(vec![
        Span::raw("> "),
        Span::styled(value, modal_title_style()),
        if editing {
            Span::styled("█", modal_title_style())
        } else {
            Span::raw("")
        },
    ]);
    [label_line, value_line]
}

fn form_lines(form: &InputFormState) -> Vec<Line<'_>> {
    let mut lines = vec![Line::raw("")];
    lines.extend(field_lines(
        "Task name:",
        &form.name,
        form.editing_field == FormField::Name,
    ));
    lines.push(Line::raw(""));
    lines.extend(field_lines(
        "Estimated hours:",
        &form.hours,
        form.editing_field == FormField::Hours,
    ));
    lines.push(Line::raw(""));
    lines.push(Line::raw("Tab to switch fields  ·  Enter to add  ·  Esc to cancel"));
    lines
}

/// Render the add-task form
pub fn render_input_form(f: &mut Frame, form: &InputFormState, area: Rect) {
    let modal_area = create_modal_area(area, 10);
    f.render_widget(Clear, modal_area);

    let paragraph = Paragraph::new(form_lines(form))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Add Task ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
