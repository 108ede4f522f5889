//! Task use case implementation.
//!
//! Creating, completing and listing tasks. Repository errors are returned to
//! the caller unchanged.

use std::sync::Arc;
use taskboard_core::error::{Result, TaskboardError};
use taskboard_core::id::IdGenerator;
use taskboard_core::owner::OwnerRepository;
use taskboard_core::task::{Task, TaskRepository};

/// Use case for the task lifecycle.
///
/// By default the owner ID given to [`TaskUseCase::create_task`] is stored as
/// is. Enable [`TaskUseCase::with_owner_check`] to reject unknown owners.
pub struct TaskUseCase {
    task_repository: Arc<dyn TaskRepository>,
    owner_repository: Arc<dyn OwnerRepository>,
    id_generator: Arc<dyn IdGenerator>,
    require_existing_owner: bool,
}

impl TaskUseCase {
    pub fn new(
        task_repository: Arc<dyn TaskRepository>,
        owner_repository: Arc<dyn OwnerRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            task_repository,
            owner_repository,
            id_generator,
            require_existing_owner: false,
        }
    }

    /// Sets whether `create_task` must find the owner before saving.
    pub fn with_owner_check(mut self, require_existing_owner: bool) -> Self {
        self.require_existing_owner = require_existing_owner;
        self
    }

    /// Creates a `Pending` task for `owner_id` and persists it.
    ///
    /// # Errors
    ///
    /// - `TaskboardError::NotFound` for the owner, only when the owner check
    ///   is enabled and no owner has this ID (nothing is saved)
    /// - any error returned by the repository's `save`
    pub async fn create_task(&self, owner_id: &str, title: &str) -> Result<Task> {
        if self.require_existing_owner && !self.owner_repository.exists(owner_id).await? {
            tracing::warn!(owner_id, "Rejected task for unknown owner");
            return Err(TaskboardError::not_found("owner", owner_id));
        }

        let task = Task::new(self.id_generator.next_id(), owner_id, title);
        self.task_repository.save(&task).await?;
        tracing::info!(task_id = %task.id(), owner_id, "Created task");
        Ok(task)
    }

    /// Marks a task as completed.
    ///
    /// Completing an already completed task succeeds and still writes the
    /// task back through `update`.
    pub async fn complete_task(&self, task_id: &str) -> Result<()> {
        let mut task = self.task_repository.find_by_id(task_id).await?;
        task.complete();
        self.task_repository.update(&task).await?;
        tracing::info!(task_id, "Completed task");
        Ok(())
    }

    /// Lists the tasks of an owner. Order is unspecified.
    pub async fn list_tasks_by_owner(&self, owner_id: &str) -> Result<Vec<Task>> {
        self.task_repository.list_by_owner(owner_id).await
    }
}
