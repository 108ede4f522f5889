//! Application wiring.
//!
//! [`Taskboard`] owns the repositories and the use cases built on top of
//! them, so callers hold a single handle instead of passing stores around.

use std::sync::Arc;
use taskboard_core::config::TaskboardConfig;
use taskboard_core::error::Result;
use taskboard_core::id::IdGenerator;
use taskboard_core::owner::OwnerRepository;
use taskboard_core::task::TaskRepository;
use taskboard_infrastructure::{
    ConfigService, InMemoryOwnerRepository, InMemoryTaskRepository, id_generator,
};

use crate::owner_usecase::OwnerUseCase;
use crate::task_usecase::TaskUseCase;

pub struct Taskboard {
    owner_repository: Arc<dyn OwnerRepository>,
    task_repository: Arc<dyn TaskRepository>,
    owners: OwnerUseCase,
    tasks: TaskUseCase,
}

impl Taskboard {
    /// Builds a taskboard backed by in-memory stores, with the identifier
    /// strategy and owner check taken from `config`.
    pub fn in_memory(config: &TaskboardConfig) -> Self {
        Self::from_parts(
            Arc::new(InMemoryOwnerRepository::new()),
            Arc::new(InMemoryTaskRepository::new()),
            id_generator::from_config(config),
            config,
        )
    }

    /// Loads the configuration through `config_service` and builds an
    /// in-memory taskboard from it.
    pub fn from_config_service(config_service: &ConfigService) -> Result<Self> {
        let config = config_service.load()?;
        Ok(Self::in_memory(&config))
    }

    /// Builds a taskboard from caller-supplied repositories and generator.
    ///
    /// Both use cases share the same generator, so owner and task IDs never
    /// collide when the generator is sequential.
    pub fn from_parts(
        owner_repository: Arc<dyn OwnerRepository>,
        task_repository: Arc<dyn TaskRepository>,
        id_generator: Arc<dyn IdGenerator>,
        config: &TaskboardConfig,
    ) -> Self {
        let owners = OwnerUseCase::new(owner_repository.clone(), id_generator.clone());
        let tasks = TaskUseCase::new(
            task_repository.clone(),
            owner_repository.clone(),
            id_generator,
        )
        .with_owner_check(config.require_existing_owner);

        tracing::debug!(
            id_strategy = ?config.id_strategy,
            require_existing_owner = config.require_existing_owner,
            "Taskboard initialized"
        );

        Self {
            owner_repository,
            task_repository,
            owners,
            tasks,
        }
    }

    pub fn owners(&self) -> &OwnerUseCase {
        &self.owners
    }

    pub fn tasks(&self) -> &TaskUseCase {
        &self.tasks
    }

    pub fn owner_repository(&self) -> &Arc<dyn OwnerRepository> {
        &self.owner_repository
    }

    pub fn task_repository(&self) -> &Arc<dyn TaskRepository> {
        &self.task_repository
    }
}
