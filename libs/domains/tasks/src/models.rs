use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::Validate;

/// Opaque task identifier, assigned by the remote store on creation.
///
/// Never generated client-side; always sourced from a store response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task priority levels
///
/// Serialized with the exact capitalized wire words ("High", "Medium",
/// "Low"); parsing from user input is case-insensitive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[strum(ascii_case_insensitive)]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
}

/// Task entity - a record confirmed by the remote store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Store-assigned unique identifier
    pub id: TaskId,
    /// Task title
    pub title: String,
    /// Task priority
    pub priority: TaskPriority,
    /// Calendar due date, `YYYY-MM-DD` on the wire
    pub due_date: NaiveDate,
    /// Whether the task is completed
    pub status: bool,
}

impl Task {
    /// Draft carrying this record's current field values, for edit prefill
    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            priority: self.priority,
            due_date: self.due_date,
            status: self.status,
        }
    }
}

/// DTO for creating a task or replacing an existing one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub priority: TaskPriority,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: bool,
}
