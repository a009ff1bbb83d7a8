//! Community handlers.

use actix_web::{HttpResponse, http::StatusCode, web};
use uuid::Uuid;

use commune_core::domain::{COMMUNITY_FIELDS, Community, CommunityChanges};
use commune_shared::dto::{CreateCommunityRequest, UpdateCommunityRequest};

use super::respond::send_response;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// A path segment that is not a UUID cannot name any community.
fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound)
}

/// POST /communities
pub async fn create_community(
    state: web::Data<AppState>,
    body: web::Json<CreateCommunityRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let community = Community::new(
        req.name.unwrap_or_default(),
        req.description.unwrap_or_default(),
    )?;
    let saved = state.communities.insert(community).await?;

    tracing::info!(community_id = %saved.id, slug = %saved.slug, "Community created");

    Ok(send_response(StatusCode::CREATED, Some(&saved), COMMUNITY_FIELDS))
}

/// GET /communities
pub async fn list_communities(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let communities = state.communities.find_all().await?;

    Ok(send_response(StatusCode::OK, Some(&communities), COMMUNITY_FIELDS))
}

/// GET /communities/{id}
pub async fn get_community(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let community = state
        .communities
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(send_response(StatusCode::OK, Some(&community), COMMUNITY_FIELDS))
}

/// PUT /communities/{id}
///
/// Unknown keys in the body are rejected by the JSON extractor, before this
/// handler runs.
pub async fn update_community(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateCommunityRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let id = parse_id(&path)?;

    let changes = CommunityChanges::new(req.name, req.description)?;
    let updated = state
        .communities
        .update(id, changes)
        .await?
        .ok_or(AppError::NotFound)?;

    tracing::info!(community_id = %updated.id, "Community updated");

    Ok(send_response(StatusCode::OK, Some(&updated), COMMUNITY_FIELDS))
}

/// DELETE /communities/{id}
pub async fn delete_community(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    state.communities.delete(id).await?;

    tracing::info!(community_id = %id, "Community deleted");

    Ok(send_response::<Community>(StatusCode::OK, None, COMMUNITY_FIELDS))
}
