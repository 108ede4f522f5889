pub mod config_service;
pub mod id_generator;
pub mod in_memory_owner_repository;
pub mod in_memory_task_repository;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::id_generator::{SequentialIdGenerator, UuidIdGenerator};
pub use crate::in_memory_owner_repository::InMemoryOwnerRepository;
pub use crate::in_memory_task_repository::InMemoryTaskRepository;
