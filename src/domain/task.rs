use super::enums::TaskStatus;
use crate::error::TaskError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Completed tasks within this many seconds of their estimate count as on time
const ON_TIME_TOLERANCE_SECS: f64 = 60.0;

/// One unit of planned work for a specific calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique ID, never reused
    pub id: Uuid,
    /// Display label (trimmed, never empty)
    pub name: String,
    /// Estimated duration in hours, fixed at creation
    pub estimated_hours: f64,
    /// Seconds accrued by ticks while active
    pub elapsed_seconds: u64,
    /// Current lifecycle status
    pub status: TaskStatus,
    /// When the task last became active (epoch milliseconds, informational)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    /// Day the task belongs to
    pub date: NaiveDate,
}

impl Task {
    /// Create a pending task, rejecting a blank name or a non-positive estimate
    pub fn new(name: &str, estimated_hours: f64, date: NaiveDate) -> Result<Self, TaskError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TaskError::EmptyName);
        }
        if !estimated_hours.is_finite() || estimated_hours <= 0.0 {
            return Err(TaskError::InvalidHours(estimated_hours));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            estimated_hours,
            elapsed_seconds: 0,
            status: TaskStatus::Pending,
            start_time: None,
            date,
        })
    }

    pub fn is_active(&self) -> bool {
        self.status == TaskStatus::Active
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Estimate expressed in seconds
    pub fn estimated_seconds(&self) -> f64 {
        self.estimated_hours * 3600.0
    }

    /// Open task that has run past its estimate
    pub fn is_overdue(&self) -> bool {
        !self.is_completed() && self.elapsed_seconds as f64 > self.estimated_seconds()
    }

    /// Format elapsed time as "HH:MM:SS"
    pub fn elapsed_formatted(&self) -> String {
        format_clock(self.elapsed_seconds)
    }

    /// Format estimate as "Xh Ym"
    pub fn estimate_formatted(&self) -> String {
        format_hours_minutes(self.estimated_hours)
    }

    /// How a completed task landed relative to its estimate
    pub fn completion_note(&self) -> Option<CompletionNote> {
        if !self.is_completed() {
            return None;
        }

        // f64 so any stored elapsed value is representable; the u64 cast saturates
        let difference = self.elapsed_seconds as f64 - self.estimated_seconds();
        let note = if difference.abs() < ON_TIME_TOLERANCE_SECS {
            CompletionNote::OnTime
        } else if difference > 0.0 {
            CompletionNote::Late(difference.round() as u64)
        } else {
            CompletionNote::Early((-difference).round() as u64)
        };
        Some(note)
    }
}

/// Outcome of a completed task against its estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionNote {
    OnTime,
    /// Seconds over the estimate
    Late(u64),
    /// Seconds under the estimate
    Early(u64),
}

impl std::fmt::Display for CompletionNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OnTime => write!(f, "on time"),
            Self::Late(secs) => write!(f, "late {}", format_hours_minutes(*secs as f64 / 3600.0)),
            Self::Early(secs) => write!(f, "early {}", format_hours_minutes(*secs as f64 / 3600.0)),
        }
    }
}

/// Parse the hours field of the add form
pub fn parse_hours(input: &str) -> Result<f64, TaskError> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| TaskError::UnparsableHours(trimmed.to_string()))
}

/// Format a second count as "HH:MM:SS"
pub fn format_clock(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format fractional hours as "Xh Ym" (omits 0 values, "0m" when nothing is left)
pub fn format_hours_minutes(hours: f64) -> String {
    if hours.is_nan() || hours <= 0.0 {
        return "0m".to_string();
    }
    let total_minutes = (hours * 60.0).round() as u64;
    let h = total_minutes / 60;
    let m = total_minutes % 60;

    if h > 0 && m > 0 {
        format!("{}h {}m", h, m)
    } else if h > 0 {
        format!("{}h", h)
    } else {
        format!("{}m", m)
    }
}
