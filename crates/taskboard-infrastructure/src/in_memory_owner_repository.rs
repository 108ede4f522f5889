//! In-memory OwnerRepository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use taskboard_core::error::{Result, TaskboardError};
use taskboard_core::owner::{Owner, OwnerRepository};
use tokio::sync::RwLock;

/// Map-backed owner store.
///
/// The map is keyed by owner ID and guarded by a `RwLock`, so a single
/// instance can be shared behind an `Arc` by several callers.
#[derive(Debug, Default, Clone)]
pub struct InMemoryOwnerRepository {
    owners: Arc<RwLock<HashMap<String, Owner>>>,
}

impl InMemoryOwnerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored owners.
    pub async fn len(&self) -> usize {
        self.owners.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.owners.read().await.is_empty()
    }
}

#[async_trait]
impl OwnerRepository for InMemoryOwnerRepository {
    async fn save(&self, owner: &Owner) -> Result<()> {
        let mut owners = self.owners.write().await;
        if owners.insert(owner.id.clone(), owner.clone()).is_some() {
            tracing::debug!(owner_id = %owner.id, "Overwrote existing owner");
        } else {
            tracing::debug!(owner_id = %owner.id, "Saved owner");
        }
        Ok(())
    }

    async fn find_by_id(&self, owner_id: &str) -> Result<Owner> {
        let owners = self.owners.read().await;
        owners
            .get(owner_id)
            .cloned()
            .ok_or_else(|| TaskboardError::not_found("owner", owner_id))
    }

    async fn list(&self) -> Result<Vec<Owner>> {
        let owners = self.owners.read().await;
        Ok(owners.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_owner(id: &str, name: &str) -> Owner {
        Owner::new(id, name, "user")
    }

    #[tokio::test]
    async fn test_save_and_find_owner() {
        let repo = InMemoryOwnerRepository::new();
        let owner = Owner::new("owner-1", "Alice", "admin");

        repo.save(&owner).await.unwrap();

        let found = repo.find_by_id("owner-1").await.unwrap();
        assert_eq!(found, owner);
    }

    #[tokio::test]
    async fn test_find_in_empty_store_is_not_found() {
        let repo = InMemoryOwnerRepository::new();

        for id in ["", "owner-1", "550e8400-e29b-41d4-a716-446655440000"] {
            let err = repo.find_by_id(id).await.unwrap_err();
            assert_eq!(err, TaskboardError::not_found("owner", id));
        }
    }

    #[tokio::test]
    async fn test_save_overwrites_same_id() {
        let repo = InMemoryOwnerRepository::new();

        repo.save(&create_test_owner("owner-1", "Alice"))
            .await
            .unwrap();
        repo.save(&create_test_owner("owner-1", "Bob"))
            .await
            .unwrap();

        assert_eq!(repo.len().await, 1);
        assert_eq!(repo.find_by_id("owner-1").await.unwrap().name, "Bob");
    }

    #[tokio::test]
    async fn test_list_returns_all_owners() {
        let repo = InMemoryOwnerRepository::new();
        assert!(repo.list().await.unwrap().is_empty());

        repo.save(&create_test_owner("owner-1", "Alice"))
            .await
            .unwrap();
        repo.save(&create_test_owner("owner-2", "Bob"))
            .await
            .unwrap();

        let mut names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryOwnerRepository::new();
        let handle = repo.clone();

        handle
            .save(&create_test_owner("owner-1", "Alice"))
            .await
            .unwrap();

        assert!(repo.exists("owner-1").await.unwrap());
        assert!(!repo.is_empty().await);
    }
}
