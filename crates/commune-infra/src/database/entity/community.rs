//! Community entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "communities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub description: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub creation_date: DateTimeWithTimeZone,
    pub revision: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Community.
impl From<Model> for commune_core::domain::Community {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            slug: model.slug,
            creation_date: model.creation_date.into(),
            revision: model.revision,
        }
    }
}

/// Conversion from Domain Community to SeaORM ActiveModel.
impl From<commune_core::domain::Community> for ActiveModel {
    fn from(community: commune_core::domain::Community) -> Self {
        Self {
            id: Set(community.id),
            name: Set(community.name),
            description: Set(community.description),
            slug: Set(community.slug),
            creation_date: Set(community.creation_date.into()),
            revision: Set(community.revision),
        }
    }
}

/// Only the supplied fields are `Set`; the rest stay `NotSet` and are left
/// out of the UPDATE statement.
impl From<commune_core::domain::CommunityChanges> for ActiveModel {
    fn from(changes: commune_core::domain::CommunityChanges) -> Self {
        let mut model = <Self as ActiveModelTrait>::default();
        if let Some(name) = changes.name {
            model.name = Set(name);
        }
        if let Some(description) = changes.description {
            model.description = Set(description);
        }
        if let Some(slug) = changes.slug {
            model.slug = Set(slug);
        }
        model
    }
}
