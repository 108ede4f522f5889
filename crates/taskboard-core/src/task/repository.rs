//! Task repository trait.
//!
//! Defines the interface for task persistence operations.

use super::model::Task;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for managing task persistence.
///
/// This trait defines the contract for persisting and retrieving tasks,
/// decoupling the use cases from the specific storage mechanism.
///
/// # Implementation Notes
///
/// Tasks are stored by value. `update` is a full replace and must not create
/// an entry that does not already exist.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Saves a task, replacing any existing entry with the same ID.
    async fn save(&self, task: &Task) -> Result<()>;

    /// Finds a task by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Task)`: Task found
    /// - `Err(TaskboardError::NotFound)`: No task has this ID
    async fn find_by_id(&self, task_id: &str) -> Result<Task>;

    /// Lists tasks whose owner ID equals `owner_id`. Order is unspecified.
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Task>>;

    /// Replaces an existing task.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Task replaced
    /// - `Err(TaskboardError::NotFound)`: No stored task has this ID; the
    ///   store is left unchanged
    async fn update(&self, task: &Task) -> Result<()>;
}
