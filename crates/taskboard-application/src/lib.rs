//! Application layer for Taskboard.
//!
//! This crate provides the use cases that coordinate the domain entities
//! through the repository traits, and a bootstrap container that wires them
//! from configuration.

pub mod bootstrap;
pub mod logging;
pub mod owner_usecase;
pub mod task_usecase;

pub use bootstrap::Taskboard;
pub use owner_usecase::OwnerUseCase;
pub use task_usecase::TaskUseCase;
