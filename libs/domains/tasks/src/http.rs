//! HTTP implementation of the task repository
//!
//! Talks to the hosted mock REST store. One remote call per operation, no
//! retries; reqwest's defaults are the only timeout policy.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{TaskError, TaskResult};
use crate::models::{Task, TaskDraft, TaskId};
use crate::repository::TaskRepository;

/// Base URL of the hosted mock task store
pub const DEFAULT_BASE_URL: &str = "https://675ed2261f7ad2426996be13.mockapi.io";

/// Task repository backed by the remote HTTP store
pub struct HttpTaskRepository {
    base_url: String,
    client: Client,
}

impl HttpTaskRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn record_url(&self, id: &TaskId) -> String {
        format!("{}/tasks/{}", self.base_url, id)
    }
}

impl Default for HttpTaskRepository {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl TaskRepository for HttpTaskRepository {
    async fn list(&self) -> TaskResult<Vec<Task>> {
        let url = self.collection_url();
        debug!(url = %url, "Fetching task collection");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| TaskError::Fetch(e.to_string()))?;

        response
            .json::<Vec<Task>>()
            .await
            .map_err(|e| TaskError::Fetch(e.to_string()))
    }

    async fn create(&self, draft: &TaskDraft) -> TaskResult<Task> {
        let url = self.collection_url();
        debug!(url = %url, title = %draft.title, "Creating task");

        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| TaskError::Create(e.to_string()))?;

        response
            .json::<Task>()
            .await
            .map_err(|e| TaskError::Create(e.to_string()))
    }

    async fn update(&self, id: &TaskId, draft: &TaskDraft) -> TaskResult<Task> {
        let url = self.record_url(id);
        debug!(url = %url, "Updating task");

        let response = self
            .client
            .put(&url)
            .json(draft)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| TaskError::Update(e.to_string()))?;

        response
            .json::<Task>()
            .await
            .map_err(|e| TaskError::Update(e.to_string()))
    }

    async fn delete(&self, id: &TaskId) -> TaskResult<()> {
        let url = self.record_url(id);
        debug!(url = %url, "Deleting task");

        self.client
            .delete(&url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| TaskError::Delete(e.to_string()))?;

        Ok(())
    }
}
