//! Owner repository trait.
//!
//! Defines the interface for owner persistence operations.

use super::model::Owner;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for owners.
///
/// Decouples the use cases from the storage mechanism. Implementations store
/// owners by value: `find_by_id` and `list` return copies.
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Saves an owner, replacing any existing entry with the same ID.
    async fn save(&self, owner: &Owner) -> Result<()>;

    /// Finds an owner by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Owner)`: Owner found
    /// - `Err(TaskboardError::NotFound)`: No owner has this ID
    async fn find_by_id(&self, owner_id: &str) -> Result<Owner>;

    /// Lists all stored owners. Order is unspecified.
    async fn list(&self) -> Result<Vec<Owner>>;

    /// Returns whether an owner with this ID exists.
    ///
    /// Any error other than `NotFound` is propagated.
    async fn exists(&self, owner_id: &str) -> Result<bool> {
        match self.find_by_id(owner_id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskboardError;

    struct SingleOwnerRepository {
        owner: Owner,
    }

    #[async_trait]
    impl OwnerRepository for SingleOwnerRepository {
        async fn save(&self, _owner: &Owner) -> Result<()> {
            Err(TaskboardError::internal("read-only"))
        }

        async fn find_by_id(&self, owner_id: &str) -> Result<Owner> {
            if owner_id == self.owner.id {
                Ok(self.owner.clone())
            } else {
                Err(TaskboardError::not_found("owner", owner_id))
            }
        }

        async fn list(&self) -> Result<Vec<Owner>> {
            Ok(vec![self.owner.clone()])
        }
    }

    struct BrokenOwnerRepository;

    #[async_trait]
    impl OwnerRepository for BrokenOwnerRepository {
        async fn save(&self, _owner: &Owner) -> Result<()> {
            Ok(())
        }

        async fn find_by_id(&self, _owner_id: &str) -> Result<Owner> {
            Err(TaskboardError::internal("backend unavailable"))
        }

        async fn list(&self) -> Result<Vec<Owner>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_exists_maps_not_found_to_false() {
        let repo = SingleOwnerRepository {
            owner: Owner::new("o-1", "Alice", "admin"),
        };

        assert!(repo.exists("o-1").await.unwrap());
        assert!(!repo.exists("o-2").await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_propagates_other_errors() {
        let err = BrokenOwnerRepository.exists("o-1").await.unwrap_err();
        assert_eq!(err, TaskboardError::internal("backend unavailable"));
    }
}
