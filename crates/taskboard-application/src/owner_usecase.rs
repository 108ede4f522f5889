//! Owner use case implementation.

use std::sync::Arc;
use taskboard_core::error::Result;
use taskboard_core::id::IdGenerator;
use taskboard_core::owner::{Owner, OwnerRepository};

/// Use case for registering and listing owners.
pub struct OwnerUseCase {
    owner_repository: Arc<dyn OwnerRepository>,
    id_generator: Arc<dyn IdGenerator>,
}

impl OwnerUseCase {
    pub fn new(
        owner_repository: Arc<dyn OwnerRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            owner_repository,
            id_generator,
        }
    }

    /// Creates an owner with a fresh ID and persists it.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the repository's `save`.
    pub async fn create_owner(&self, name: &str, role: &str) -> Result<Owner> {
        let owner = Owner::new(self.id_generator.next_id(), name, role);
        self.owner_repository.save(&owner).await?;
        tracing::info!(owner_id = %owner.id, role = %owner.role, "Created owner");
        Ok(owner)
    }

    /// Lists every registered owner. Order is unspecified.
    pub async fn list_owners(&self) -> Result<Vec<Owner>> {
        self.owner_repository.list().await
    }
}
