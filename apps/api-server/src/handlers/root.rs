//! Root endpoint.

use actix_web::{HttpResponse, http::StatusCode};

use super::respond::send_response;

/// GET /
pub async fn root() -> HttpResponse {
    send_response::<()>(StatusCode::OK, None, &[])
}

/// Fallback for any unrouted path.
pub async fn not_found() -> HttpResponse {
    send_response::<()>(StatusCode::NOT_FOUND, None, &[])
}
