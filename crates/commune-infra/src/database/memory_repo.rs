//! In-memory community repository - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use commune_core::domain::{Community, CommunityChanges};
use commune_core::error::RepoError;
use commune_core::ports::{BaseRepository, CommunityRepository};

/// In-memory community store behind an async RwLock.
///
/// Records are kept in insertion order and enforce the same unique keys
/// (`id`, `slug`) as the database table.
/// Note: Data is lost on process restart.
pub struct InMemoryCommunityRepository {
    store: RwLock<Vec<Community>>,
}

impl InMemoryCommunityRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryCommunityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Community, Uuid> for InMemoryCommunityRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Community>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, community: Community) -> Result<Community, RepoError> {
        let mut store = self.store.write().await;

        if store.iter().any(|c| c.id == community.id) {
            return Err(RepoError::Constraint("duplicate id".to_string()));
        }
        if store.iter().any(|c| c.slug == community.slug) {
            return Err(RepoError::Constraint(format!(
                "duplicate slug '{}'",
                community.slug
            )));
        }

        store.push(community.clone());
        Ok(community)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|c| c.id != id);

        if store.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl CommunityRepository for InMemoryCommunityRepository {
    async fn find_all(&self) -> Result<Vec<Community>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: CommunityChanges,
    ) -> Result<Option<Community>, RepoError> {
        let mut store = self.store.write().await;

        let Some(index) = store.iter().position(|c| c.id == id) else {
            return Ok(None);
        };

        if let Some(slug) = &changes.slug {
            if store.iter().any(|c| c.id != id && &c.slug == slug) {
                return Err(RepoError::Constraint(format!("duplicate slug '{slug}'")));
            }
        }

        let community = &mut store[index];
        changes.apply(community);
        Ok(Some(community.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn community(name: &str) -> Community {
        Community::new(name.to_string(), "Desc".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryCommunityRepository::new();
        let saved = repo.insert(community("Test")).await.unwrap();

        let found = repo.find_by_id(saved.id).await.unwrap();
        assert_eq!(found, Some(saved));
        assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_rejected() {
        let repo = InMemoryCommunityRepository::new();
        repo.insert(community("Test")).await.unwrap();

        let result = repo.insert(community("test")).await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryCommunityRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());

        let first = repo.insert(community("Zeta")).await.unwrap();
        let second = repo.insert(community("Alpha")).await.unwrap();

        let ids: Vec<Uuid> = repo.find_all().await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn test_update_applies_changes() {
        let repo = InMemoryCommunityRepository::new();
        let saved = repo.insert(community("Test")).await.unwrap();

        let changes = CommunityChanges::new(Some("Renamed".to_string()), None).unwrap();
        let updated = repo.update(saved.id, changes).await.unwrap().unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.slug, "renamed");
        assert_eq!(updated.description, "Desc");
        assert_eq!(updated.revision, 1);
        assert_eq!(repo.find_by_id(saved.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryCommunityRepository::new();
        let changes = CommunityChanges::new(None, Some("Desc".to_string())).unwrap();

        assert_eq!(repo.update(Uuid::new_v4(), changes).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_missing_with_taken_slug_returns_none() {
        let repo = InMemoryCommunityRepository::new();
        repo.insert(community("Taken")).await.unwrap();

        let changes = CommunityChanges::new(Some("Taken".to_string()), None).unwrap();
        assert_eq!(repo.update(Uuid::new_v4(), changes).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_to_taken_slug_is_rejected() {
        let repo = InMemoryCommunityRepository::new();
        repo.insert(community("Taken")).await.unwrap();
        let other = repo.insert(community("Other")).await.unwrap();

        let changes = CommunityChanges::new(Some("Taken".to_string()), None).unwrap();
        let result = repo.update(other.id, changes).await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_rename_to_own_slug_is_allowed() {
        let repo = InMemoryCommunityRepository::new();
        let saved = repo.insert(community("Test")).await.unwrap();

        let changes = CommunityChanges::new(Some("TEST".to_string()), None).unwrap();
        let updated = repo.update(saved.id, changes).await.unwrap().unwrap();
        assert_eq!(updated.name, "TEST");
        assert_eq!(updated.slug, "test");
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryCommunityRepository::new();
        let saved = repo.insert(community("Test")).await.unwrap();

        repo.delete(saved.id).await.unwrap();
        assert_eq!(repo.find_by_id(saved.id).await.unwrap(), None);
        assert!(matches!(repo.delete(saved.id).await, Err(RepoError::NotFound)));
    }
}
