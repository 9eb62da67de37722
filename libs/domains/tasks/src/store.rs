use tokio::sync::watch;

use crate::models::{Task, TaskId};

/// Last-known-good in-memory mirror of the remote task store.
///
/// Holds the ordered collection the interface currently believes to exist.
/// Mutators are crate-private: outside this crate the only write path is
/// [`crate::TaskService`], which applies a mutation only after a confirmed
/// store response. Subscribers receive a revision bump as the re-render
/// signal; the channel carries no task data.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    revision: watch::Sender<u64>,
}

impl TaskStore {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            tasks: Vec::new(),
            revision,
        }
    }

    /// The current collection, in store order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Subscribe to change notifications; the value is a revision counter
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Wholesale replacement after a successful list
    pub(crate) fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.bump();
    }

    /// Append after a successful create
    pub(crate) fn insert(&mut self, task: Task) {
        self.tasks.push(task);
        self.bump();
    }

    /// In-place replacement after a successful update; order is preserved
    pub(crate) fn apply_update(&mut self, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
            self.bump();
        }
    }

    /// Removal after a successful delete
    pub(crate) fn remove(&mut self, id: &TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|task| &task.id != id);
        if self.tasks.len() != before {
            self.bump();
        }
    }

    fn bump(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
