use crate::domain::{ChartSegment, DailySummary};
use crate::ui::styles::{
    border_style, completed_gauge_style, hint_style, pending_gauge_style, title_style,
    unallocated_gauge_style,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

fn gauge_style(segment: ChartSegment) -> Style {
    match segment {
        ChartSegment::Completed(_) => completed_gauge_style(),
        ChartSegment::Pending(_) => pending_gauge_style(),
        ChartSegment::Unallocated(_) => unallocated_gauge_style(),
    }
}

/// Gauge caption, e.g. "Completed 2.0h (40%)"
fn segment_label(summary: &DailySummary, segment: ChartSegment) -> String {
    format!(
        "{} {:.1}h ({:.0}%)",
        segment.label(),
        segment.hours(),
        summary.chart_ratio(segment) * 100.0
    )
}

/// Render the completed / pending / unallocated breakdown
pub fn render_progress_pane(f: &mut Frame, summary: &DailySummary, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Progress ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if summary.daily_budget <= 0.0 {
        f.render_widget(
            Paragraph::new("Select a daily budget to see progress").style(hint_style()),
            inner,
        );
        return;
    }

    let segments = summary.chart_segments();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            segments
                .iter()
                .map(|_| Constraint::Length(2))
                .chain(std::iter::once(Constraint::Min(0)))
                .collect::<Vec<_>>(),
        )
        .split(inner);

    for (segment, row) in segments.iter().zip(rows.iter()) {
        let gauge = Gauge::default()
            .gauge_style(gauge_style(*segment))
            .ratio(summary.chart_ratio(*segment))
            .label(segment_label(summary, *segment));
        f.render_widget(gauge, Rect { height: 1, ..*row });
    }
}
