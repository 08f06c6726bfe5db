use crate::persistence::BUDGET_OPTIONS;
use crate::ui::styles::{border_style, budget_option_style, budget_selected_style, title_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn budget_line(current: f64) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, option) in BUDGET_OPTIONS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *option == current {
            budget_selected_style()
        } else {
            budget_option_style()
        };
        spans.push(Span::styled(format!(" {}h ", option), style));
    }
    Line::from(spans)
}

/// Render the daily budget selector
pub fn render_budget_pane(f: &mut Frame, daily_budget: f64, area: Rect) {
    let paragraph = Paragraph::new(budget_line(daily_budget))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Daily Budget [b] ", title_style())),
        );
    f.render_widget(paragraph, area);
}
