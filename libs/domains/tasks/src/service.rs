use std::sync::Arc;

use tracing::instrument;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{Task, TaskDraft, TaskId};
use crate::repository::TaskRepository;
use crate::store::TaskStore;

/// Keeps the in-memory task collection consistent with the remote store.
///
/// Each operation issues exactly one remote call and folds the confirmed
/// response into the owned [`TaskStore`]. A failed call leaves the store
/// untouched; there is no speculative mutation ahead of the response and
/// no automatic retry. Overlapping calls are not coordinated: the last
/// response to apply wins.
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
    store: TaskStore,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            store: TaskStore::new(),
        }
    }

    /// Read access to the collection for the presentation layer
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Replace the collection wholesale from the remote store
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> TaskResult<()> {
        let tasks = self.repository.list().await?;
        self.store.replace_all(tasks);
        Ok(())
    }

    /// Create a task; the store-assigned record is appended on success
    #[instrument(skip(self, draft), fields(task_title = %draft.title))]
    pub async fn create_task(&mut self, draft: &TaskDraft) -> TaskResult<Task> {
        draft
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        let task = self.repository.create(draft).await?;
        self.store.insert(task.clone());
        Ok(task)
    }

    /// Replace the full record at `id` with the draft's field values
    #[instrument(skip(self, draft), fields(task_id = %id))]
    pub async fn update_task(&mut self, id: &TaskId, draft: &TaskDraft) -> TaskResult<Task> {
        draft
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        let task = self.repository.update(id, draft).await?;
        self.store.apply_update(task.clone());
        Ok(task)
    }

    /// Delete the record at `id`
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete_task(&mut self, id: &TaskId) -> TaskResult<()> {
        self.repository.delete(id).await?;
        self.store.remove(id);
        Ok(())
    }
}
