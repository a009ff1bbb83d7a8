use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Maximum length of a community name, in characters.
const NAME_MAX_LEN: usize = 100;

/// Maximum length of a community description, in characters.
const DESCRIPTION_MAX_LEN: usize = 200;

/// Fields of a [`Community`] that may be shown to API clients.
pub const COMMUNITY_FIELDS: &[&str] = &["id", "name", "description", "slug", "creationDate"];

/// Fields a client is allowed to change on an existing community.
pub const UPDATABLE_FIELDS: &[&str] = &["name", "description"];

/// Community entity - the only resource exposed by the API.
///
/// `revision` is a storage-side counter bumped on every update. It is part of
/// the stored record but not of [`COMMUNITY_FIELDS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub creation_date: DateTime<Utc>,
    pub revision: i32,
}

impl Community {
    /// Create a new community with generated ID, slug and creation date.
    pub fn new(name: String, description: String) -> Result<Self, DomainError> {
        validate_name(&name)?;
        validate_description(&description)?;
        let slug = derive_slug(&name)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            description,
            slug,
            creation_date: Utc::now(),
            revision: 0,
        })
    }
}

/// A validated partial update of a community.
///
/// Fields left as `None` are not touched by persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommunityChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
}

impl CommunityChanges {
    /// Validate the supplied fields and recompute the slug when the name changes.
    pub fn new(name: Option<String>, description: Option<String>) -> Result<Self, DomainError> {
        let slug = match &name {
            Some(name) => {
                validate_name(name)?;
                Some(derive_slug(name)?)
            }
            None => None,
        };
        if let Some(description) = &description {
            validate_description(description)?;
        }

        Ok(Self {
            name,
            description,
            slug,
        })
    }

    /// Apply the changes in place and bump the record revision.
    pub fn apply(&self, community: &mut Community) {
        if let Some(name) = &self.name {
            community.name.clone_from(name);
        }
        if let Some(description) = &self.description {
            community.description.clone_from(description);
        }
        if let Some(slug) = &self.slug {
            community.slug.clone_from(slug);
        }
        community.revision += 1;
    }
}

/// URL-safe form of a community name.
pub fn slugify(name: &str) -> String {
    slug::slugify(name)
}

fn derive_slug(name: &str) -> Result<String, DomainError> {
    let slug = slugify(name);
    if slug.is_empty() {
        return Err(DomainError::Validation(
            "name must contain at least one letter or digit".to_string(),
        ));
    }
    Ok(slug)
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    validate_length("name", name, NAME_MAX_LEN)
}

fn validate_description(description: &str) -> Result<(), DomainError> {
    validate_length("description", description, DESCRIPTION_MAX_LEN)
}

fn validate_length(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    let len = value.chars().count();
    if len == 0 {
        return Err(DomainError::Validation(format!("{field} is required")));
    }
    if len > max {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_slug_and_identity() {
        let community = Community::new(
            "The test community".to_string(),
            "A community to test the model".to_string(),
        )
        .unwrap();

        assert_eq!(community.slug, "the-test-community");
        assert_eq!(community.revision, 0);
        assert!(!community.id.is_nil());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Community::new("Test".to_string(), "Desc".to_string()).unwrap();
        let b = Community::new("Test".to_string(), "Desc".to_string()).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.slug, b.slug);
    }

    #[test]
    fn test_length_bounds() {
        assert!(Community::new("a".repeat(100), "d".repeat(200)).is_ok());
        assert!(matches!(
            Community::new("a".repeat(101), "Desc".to_string()),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            Community::new("Test".to_string(), "d".repeat(201)),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_fields_are_rejected() {
        assert!(Community::new(String::new(), "Desc".to_string()).is_err());
        assert!(Community::new("Test".to_string(), String::new()).is_err());
    }

    #[test]
    fn test_name_without_slug_characters_is_rejected() {
        assert!(Community::new("!!!".to_string(), "Desc".to_string()).is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert!(Community::new("é".repeat(100), "Desc".to_string()).is_ok());
    }

    #[test]
    fn test_changes_recompute_slug_only_with_name() {
        let changes = CommunityChanges::new(None, Some("New desc".to_string())).unwrap();
        assert_eq!(changes.slug, None);

        let changes = CommunityChanges::new(Some("Renamed Group".to_string()), None).unwrap();
        assert_eq!(changes.slug.as_deref(), Some("renamed-group"));
    }

    #[test]
    fn test_changes_validate_supplied_fields() {
        assert!(CommunityChanges::new(Some("a".repeat(101)), None).is_err());
        assert!(CommunityChanges::new(None, Some(String::new())).is_err());
        assert_eq!(
            CommunityChanges::new(None, None).unwrap(),
            CommunityChanges::default()
        );
    }

    #[test]
    fn test_apply_keeps_server_fields() {
        let mut community = Community::new("Test".to_string(), "Desc".to_string()).unwrap();
        let before = community.clone();

        CommunityChanges::new(Some("Other".to_string()), None)
            .unwrap()
            .apply(&mut community);

        assert_eq!(community.name, "Other");
        assert_eq!(community.slug, "other");
        assert_eq!(community.description, before.description);
        assert_eq!(community.id, before.id);
        assert_eq!(community.creation_date, before.creation_date);
        assert_eq!(community.revision, 1);
    }

    #[test]
    fn test_allow_list_names_serialized_fields() {
        let community = Community::new("Test".to_string(), "Desc".to_string()).unwrap();
        let value = serde_json::to_value(&community).unwrap();
        let object = value.as_object().unwrap();

        for field in COMMUNITY_FIELDS.iter().chain(UPDATABLE_FIELDS) {
            assert!(object.contains_key(*field), "missing field {field}");
        }
        assert!(object.contains_key("revision"));
        assert!(!COMMUNITY_FIELDS.contains(&"revision"));
    }
}
