use async_trait::async_trait;

use crate::error::TaskResult;
use crate::models::{Task, TaskDraft, TaskId};

/// Repository trait for the remote task store
///
/// This trait defines the four CRUD calls against the store of record.
/// The production implementation talks HTTP ([`crate::HttpTaskRepository`]);
/// tests use the generated mock.
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Fetch the full current collection
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// Create a task from a draft; the store assigns the id
    async fn create(&self, draft: &TaskDraft) -> TaskResult<Task>;

    /// Replace the full record at `id`, returning the store-confirmed record
    async fn update(&self, id: &TaskId, draft: &TaskDraft) -> TaskResult<Task>;

    /// Delete the record at `id`
    async fn delete(&self, id: &TaskId) -> TaskResult<()>;
}
