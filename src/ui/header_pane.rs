use crate::domain::DailySummary;
use crate::ui::layout::split_stat_cards;
use crate::ui::styles::{
    border_style, stat_allocated_style, stat_completion_style, stat_remaining_style, title_style,
};
use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Long-form dashboard title for a day, e.g. "Tuesday, January 2, 2024"
fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// The three headline figures, already formatted
pub fn stat_values(summary: &DailySummary) -> [(&'static str, String); 3] {
    [
        ("Allocated", format!("{:.1}h", summary.allocated_hours)),
        ("Remaining today", format!("{:.1}h", summary.remaining_hours)),
        ("Completed", format!("{:.0}%", summary.completion_percentage)),
    ]
}

fn render_stat_card(f: &mut Frame, area: Rect, label: &str, value: String, style: Style) {
    let paragraph = Paragraph::new(Line::from(Span::styled(value, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::raw(format!(" {} ", label))),
        );
    f.render_widget(paragraph, area);
}

/// Render the date title and stat cards
pub fn render_header_pane(f: &mut Frame, summary: &DailySummary, today: NaiveDate, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(
            format!(" Dashboard · {} ", format_long_date(today)),
            title_style(),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cards = split_stat_cards(inner);
    let styles = [stat_allocated_style(), stat_remaining_style(), stat_completion_style()];
    for ((card, (label, value)), style) in cards.into_iter().zip(stat_values(summary)).zip(styles) {
        render_stat_card(f, card, label, value, style);
    }
}
