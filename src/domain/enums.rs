use serde::{Deserialize, Serialize};

/// Lifecycle status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Active,
    Completed,
}

impl TaskStatus {
    /// Convert status to an upper-case tag
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
        }
    }

    /// Whether the task still counts as open work (not completed)
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Completed)
    }

    /// Whether `start` is offered for a task in this state
    pub fn can_start(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Whether `complete` is offered for a task in this state
    pub fn can_complete(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Whether `reset time` is offered for a task in this state
    pub fn can_reset(&self) -> bool {
        self.is_open()
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    Notice,
    DayChanged, // Shown when midnight has passed, forces restart
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_to_tag() {
        assert_eq!(TaskStatus::Pending.to_tag(), "PENDING");
        assert_eq!(TaskStatus::Active.to_tag(), "ACTIVE");
        assert_eq!(TaskStatus::Completed.to_tag(), "COMPLETED");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&TaskStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
        let parsed: TaskStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, TaskStatus::Completed);
    }

    #[test]
    fn test_offered_actions() {
        assert!(TaskStatus::Pending.can_start());
        assert!(!TaskStatus::Active.can_start());
        assert!(TaskStatus::Active.can_complete());
        assert!(!TaskStatus::Pending.can_complete());
        assert!(TaskStatus::Active.can_reset());
        assert!(!TaskStatus::Completed.can_reset());
    }
}
