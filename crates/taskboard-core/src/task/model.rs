//! Task domain model.
//!
//! A task is a unit of work belonging to exactly one owner, tracked through
//! a status lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the current status of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// The task has been created but no work has started.
    #[default]
    Pending,
    /// Work on the task has started.
    InProgress,
    /// The task is done. Terminal state.
    Completed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Completed => "Completed",
        };
        f.write_str(label)
    }
}

/// A task owned by a single owner.
///
/// The owner reference is fixed at construction; only the status can change,
/// and only through [`Task::complete`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: String,
    owner_id: String,
    title: String,
    status: TaskStatus,
}

impl Task {
    /// Creates a new task in `Pending` status.
    pub fn new(
        id: impl Into<String>,
        owner_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            title: title.into(),
            status: TaskStatus::Pending,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// ID of the owner this task belongs to. Not checked against the owner
    /// store here.
    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Marks the task as completed regardless of its current status.
    pub fn complete(&mut self) {
        self.status = TaskStatus::Completed;
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new("t-1", "o-1", "Buy milk");

        assert_eq!(task.id(), "t-1");
        assert_eq!(task.owner_id(), "o-1");
        assert_eq!(task.title(), "Buy milk");
        assert_eq!(task.status(), TaskStatus::Pending);
        assert!(!task.is_completed());
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut task = Task::new("t-1", "o-1", "Buy milk");

        task.complete();
        assert_eq!(task.status(), TaskStatus::Completed);

        task.complete();
        assert_eq!(task.status(), TaskStatus::Completed);
        assert_eq!(task.owner_id(), "o-1");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(TaskStatus::Pending.to_string(), "Pending");
        assert_eq!(TaskStatus::InProgress.to_string(), "In progress");
        assert_eq!(TaskStatus::Completed.to_string(), "Completed");
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }
}
