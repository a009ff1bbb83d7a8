use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Community, CommunityChanges};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Store a new entity. Fails with `RepoError::Constraint` when a unique
    /// key is already taken.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` when
    /// nothing was removed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Community repository.
#[async_trait]
pub trait CommunityRepository: BaseRepository<Community, Uuid> {
    /// List every community, oldest first.
    async fn find_all(&self) -> Result<Vec<Community>, RepoError>;

    /// Find a community and replace the given fields in one step.
    ///
    /// Returns the updated record, or `None` when no community has this ID.
    async fn update(
        &self,
        id: Uuid,
        changes: CommunityChanges,
    ) -> Result<Option<Community>, RepoError>;
}
