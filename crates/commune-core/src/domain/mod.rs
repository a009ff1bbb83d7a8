//! Domain entities - the core business objects.

mod community;

pub use community::{
    COMMUNITY_FIELDS, Community, CommunityChanges, UPDATABLE_FIELDS, slugify,
};
