use super::enums::TaskStatus;
use super::task::Task;
use chrono::NaiveDate;

/// Tasks belonging to `today`, in store order
pub fn todays_tasks(tasks: &[Task], today: NaiveDate) -> Vec<&Task> {
    tasks.iter().filter(|t| t.date == today).collect()
}

/// Budget figures for one day, recomputed on every read
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailySummary {
    pub daily_budget: f64,
    pub allocated_hours: f64,
    pub completed_hours: f64,
    pub remaining_hours: f64,
    pub completion_percentage: f64,
    pub pending_hours: f64,
    pub unallocated_hours: f64,
}

/// Compute today's budget figures from the full task collection
pub fn compute_summary(tasks: &[Task], today: NaiveDate, daily_budget: f64) -> DailySummary {
    let todays = todays_tasks(tasks, today);

    // fold from +0.0: an empty f64 sum() yields -0.0, which prints as "-0.0h"
    let allocated_hours = todays.iter().fold(0.0, |sum, t| sum + t.estimated_hours);
    let completed_hours = todays
        .iter()
        .filter(|t| t.is_completed())
        .fold(0.0, |sum, t| sum + t.estimated_hours);

    let completion_percentage = if allocated_hours > 0.0 {
        completed_hours / allocated_hours * 100.0
    } else {
        0.0
    };

    DailySummary {
        daily_budget,
        allocated_hours,
        completed_hours,
        remaining_hours: daily_budget - allocated_hours,
        completion_percentage,
        pending_hours: allocated_hours - completed_hours,
        unallocated_hours: (daily_budget - allocated_hours).max(0.0),
    }
}

/// One slice of the progress chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartSegment {
    Completed(f64),
    Pending(f64),
    Unallocated(f64),
}

impl ChartSegment {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed(_) => "Completed",
            Self::Pending(_) => "Pending",
            Self::Unallocated(_) => "Unallocated",
        }
    }

    pub fn hours(&self) -> f64 {
        match self {
            Self::Completed(h) | Self::Pending(h) | Self::Unallocated(h) => *h,
        }
    }
}

impl DailySummary {
    /// Chart slices with a positive value, in display order
    pub fn chart_segments(&self) -> Vec<ChartSegment> {
        [
            ChartSegment::Completed(self.completed_hours),
            ChartSegment::Pending(self.pending_hours),
            ChartSegment::Unallocated(self.unallocated_hours),
        ]
        .into_iter()
        .filter(|s| s.hours() > 0.0)
        .collect()
    }

    /// Share of the chart total taken by one segment (0.0 to 1.0)
    pub fn chart_ratio(&self, segment: ChartSegment) -> f64 {
        let total: f64 = self.chart_segments().iter().map(|s| s.hours()).sum();
        if total > 0.0 {
            (segment.hours() / total).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Get status badge text
pub fn status_badge(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "· PENDING",
        TaskStatus::Active => "⏱ RUNNING",
        TaskStatus::Completed => "✓ DONE",
    }
}
