use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn render_boxed(f: &mut Frame, area: Rect, height: u16, title: &str, lines: Vec<Line>) {
    let modal_area = create_modal_area(area, height);
    f.render_widget(Clear, modal_area);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title.to_string(), modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render a dismissable warning, e.g. a rejected task
pub fn render_notice_modal(f: &mut Frame, message: &str, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::raw(format!("  {}", message)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [any key]", modal_title_style()),
            Span::raw(" Dismiss"),
        ]),
    ];
    render_boxed(f, area, 7, " ⚠ Notice ", lines);
}

/// Render the day changed modal (forces restart)
pub fn render_day_changed_modal(f: &mut Frame, today: NaiveDate, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::raw("  A new day has begun!"),
        Line::raw(""),
        Line::raw(format!("  This session was opened on {}.", today.format("%Y-%m-%d"))),
        Line::raw("  Restart to roll unfinished tasks over to today."),
        Line::raw(""),
        Line::raw("  Your work has been saved."),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [q]", modal_title_style()),
            Span::raw(" Quit"),
        ]),
    ];
    render_boxed(f, area, 11, " \u{1F305} Day Changed ", lines);
}
