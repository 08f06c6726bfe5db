use thiserror::Error;

/// Rejected task input. Surfaced to the user as a notice, never fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaskError {
    #[error("Task name must not be empty")]
    EmptyName,

    #[error("Estimated hours must be a positive number (got {0})")]
    InvalidHours(f64),

    #[error("Estimated hours must be a number (got \"{0}\")")]
    UnparsableHours(String),
}
