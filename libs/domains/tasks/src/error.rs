use thiserror::Error;

/// Error taxonomy for task operations.
///
/// Transport failures, server errors, and bad responses all collapse into
/// the variant for the operation that was attempted; the payload is the
/// underlying message, kept for the logs only.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Failed to fetch tasks: {0}")]
    Fetch(String),

    #[error("Failed to create task: {0}")]
    Create(String),

    #[error("Failed to update task: {0}")]
    Update(String),

    #[error("Failed to delete task: {0}")]
    Delete(String),

    #[error("Invalid input: {0}")]
    Validation(String),
}

pub type TaskResult<T> = Result<T, TaskError>;

impl TaskError {
    /// User-facing one-line notice naming the attempted operation
    pub fn notice(&self) -> &'static str {
        match self {
            TaskError::Fetch(_) => "Failed to fetch tasks.",
            TaskError::Create(_) => "Failed to add task.",
            TaskError::Update(_) => "Failed to update task.",
            TaskError::Delete(_) => "Failed to delete task.",
            TaskError::Validation(_) => "Please fix the invalid fields.",
        }
    }
}
