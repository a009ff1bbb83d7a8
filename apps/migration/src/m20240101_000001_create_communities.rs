use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Communities::Table)
                    .if_not_exists()
                    .col(uuid(Communities::Id).primary_key())
                    .col(string_len(Communities::Name, 100))
                    .col(string_len(Communities::Description, 200))
                    .col(string_uniq(Communities::Slug))
                    .col(timestamp_with_time_zone(Communities::CreationDate))
                    .col(integer(Communities::Revision).default(0))
                    .to_owned(),
            )
            .await?;

        // Listing is ordered by creation date
        manager
            .create_index(
                Index::create()
                    .name("idx_communities_creation_date")
                    .table(Communities::Table)
                    .col(Communities::CreationDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Communities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Communities {
    Table,
    Id,
    Name,
    Description,
    Slug,
    CreationDate,
    Revision,
}
