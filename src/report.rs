use crate::domain::{format_hours_minutes, DailySummary, Task};
use chrono::NaiveDate;

/// Plain-text summary of one day, printed by `dayglass status`
pub fn status_report(tasks: &[&Task], summary: &DailySummary, today: NaiveDate) -> String {
    let mut report = String::new();

    report.push_str(&format!("Dayglass · {}\n\n", today.format("%A, %B %-d, %Y")));

    report.push_str(&format!("Budget:     {:.1}h\n", summary.daily_budget));
    report.push_str(&format!("Allocated:  {:.1}h\n", summary.allocated_hours));
    report.push_str(&format!("Remaining:  {:.1}h\n", summary.remaining_hours));
    report.push_str(&format!(
        "Completed:  {} of {} ({:.0}%)\n",
        format_hours_minutes(summary.completed_hours),
        format_hours_minutes(summary.allocated_hours),
        summary.completion_percentage
    ));

    if tasks.is_empty() {
        report.push_str("\nNo tasks for today.\n");
        return report;
    }

    report.push('\n');
    for task in tasks {
        report.push_str(&format!(
            "[{:<9}] {}  est {}  {}",
            task.status.to_tag(),
            task.name,
            task.estimate_formatted(),
            task.elapsed_formatted()
        ));
        if let Some(note) = task.completion_note() {
            report.push_str(&format!("  ({})", note));
        }
        report.push('\n');
    }

    report
}
