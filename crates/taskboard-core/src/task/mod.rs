//! Task domain module.
//!
//! This module contains the task entity, its status lifecycle and the
//! repository interface used to persist tasks.
//!
//! # Module Structure
//!
//! - `model`: Core task domain models (`Task`, `TaskStatus`)
//! - `repository`: Task repository trait for persistence
//!
//! # Usage
//!
//! ```ignore
//! use taskboard_core::task::{Task, TaskStatus, TaskRepository};
//! ```

mod model;
pub mod repository;

// Re-export public API
pub use model::{Task, TaskStatus};
pub use repository::TaskRepository;
