//! In-memory TaskRepository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use taskboard_core::error::{Result, TaskboardError};
use taskboard_core::task::{Task, TaskRepository};
use tokio::sync::RwLock;

/// Map-backed task store keyed by task ID.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<String, Task>>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tasks.
    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, task: &Task) -> Result<()> {
        let mut tasks = self.tasks.write().await;
        tasks.insert(task.id().to_string(), task.clone());
        tracing::debug!(task_id = %task.id(), owner_id = %task.owner_id(), "Saved task");
        Ok(())
    }

    async fn find_by_id(&self, task_id: &str) -> Result<Task> {
        let tasks = self.tasks.read().await;
        tasks
            .get(task_id)
            .cloned()
            .ok_or_else(|| TaskboardError::not_found("task", task_id))
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .values()
            .filter(|task| task.owner_id() == owner_id)
            .cloned()
            .collect())
    }

    async fn update(&self, task: &Task) -> Result<()> {
        let mut tasks = self.tasks.write().await;
        match tasks.get_mut(task.id()) {
            Some(stored) => {
                *stored = task.clone();
                tracing::debug!(task_id = %task.id(), status = %task.status(), "Updated task");
                Ok(())
            }
            None => Err(TaskboardError::not_found("task", task.id())),
        }
    }
}
