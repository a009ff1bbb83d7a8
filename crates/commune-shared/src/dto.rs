//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a community.
///
/// Keys other than `name` and `description` are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCommunityRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Request to update a community.
///
/// Only `name` and `description` are accepted; any other key makes the body
/// fail to deserialize. An explicit `null` counts as an absent field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateCommunityRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
