//! Task endpoints.

use taskdeck_core::logging::targets;

use super::mapper::BackendTask;
use super::model::{Task, TaskPage, TaskQuery};
use crate::error::Result;
use crate::http::ApiClient;

const BASE_PATH: &str = "/tasks/";

/// CRUD and state changes for tasks, in canonical form.
#[derive(Debug, Clone)]
pub struct TaskService {
    client: ApiClient,
}

impl TaskService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch one page of tasks.
    pub async fn list(&self, query: &TaskQuery) -> Result<TaskPage> {
        let page: TaskPage<BackendTask> = self
            .client
            .get(BASE_PATH)
            .query_pairs(query.to_params())
            .send_json()
            .await?;
        tracing::debug!(
            target: targets::HTTP,
            page = page.number,
            items = page.content.len(),
            total = page.total_elements,
            "tasks listed"
        );
        Ok(page.map(Task::from))
    }

    pub async fn get(&self, id: &str) -> Result<Task> {
        let task: BackendTask = self.client.get(&task_path(id)).send_json().await?;
        Ok(task.into())
    }

    /// Create a task; the backend assigns id, creation date and owner.
    pub async fn create(&self, task: &Task) -> Result<Task> {
        let created: BackendTask = self
            .client
            .post(BASE_PATH)
            .json(&BackendTask::from(task))
            .send_json()
            .await?;
        Ok(created.into())
    }

    pub async fn update(&self, id: &str, task: &Task) -> Result<Task> {
        let updated: BackendTask = self
            .client
            .put(&task_path(id))
            .json(&BackendTask::from(task))
            .send_json()
            .await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&task_path(id)).send_empty().await
    }

    /// Move a task to `CONCLUIDA`.
    pub async fn mark_complete(&self, id: &str) -> Result<Task> {
        self.transition(id, "complete").await
    }

    /// Move a task back to `PENDENTE`.
    pub async fn mark_pending(&self, id: &str) -> Result<Task> {
        self.transition(id, "pending").await
    }

    async fn transition(&self, id: &str, action: &str) -> Result<Task> {
        let task: BackendTask = self
            .client
            .patch(&format!("{}/{action}", task_path(id)))
            .json(&serde_json::json!({}))
            .send_json()
            .await?;
        Ok(task.into())
    }
}

fn task_path(id: &str) -> String {
    format!("{BASE_PATH}{id}")
}
