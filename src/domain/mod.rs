pub mod enums;
pub mod lifecycle;
pub mod task;
pub mod views;

pub use enums::{TaskStatus, UiMode};
pub use task::{format_hours_minutes, parse_hours, CompletionNote, Task};
pub use views::{compute_summary, status_badge, todays_tasks, ChartSegment, DailySummary};
