//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use commune_core::domain::{Community, CommunityChanges};
use commune_core::error::RepoError;
use commune_core::ports::CommunityRepository;

use super::entity::community::{self, Entity as CommunityEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL community repository.
pub type PostgresCommunityRepository = PostgresBaseRepository<CommunityEntity>;

#[async_trait]
impl CommunityRepository for PostgresCommunityRepository {
    async fn find_all(&self) -> Result<Vec<Community>, RepoError> {
        let result = CommunityEntity::find()
            .order_by_asc(community::Column::CreationDate)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: CommunityChanges,
    ) -> Result<Option<Community>, RepoError> {
        tracing::debug!(community_id = %id, renamed = changes.name.is_some(), "Updating community");

        // Single UPDATE .. RETURNING so the lookup and the write cannot interleave
        let active_model: community::ActiveModel = changes.into();
        let updated = CommunityEntity::update_many()
            .set(active_model)
            .col_expr(
                community::Column::Revision,
                Expr::col(community::Column::Revision).add(1),
            )
            .filter(community::Column::Id.eq(id))
            .exec_with_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(updated.into_iter().next().map(Into::into))
    }
}
