//! Error types for coursecal.

use thiserror::Error;

/// Errors that can occur while extracting courses or building calendars.
#[derive(Error, Debug)]
pub enum CourseCalError {
    /// Source text broke the schedule format contract (time, date range,
    /// weekday token, or a missing labeled field).
    #[error("Format error: {0}")]
    Format(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CourseCalError {
    pub(crate) fn format(message: impl Into<String>) -> Self {
        CourseCalError::Format(message.into())
    }
}

/// Result type alias for coursecal operations.
pub type CourseCalResult<T> = Result<T, CourseCalError>;
