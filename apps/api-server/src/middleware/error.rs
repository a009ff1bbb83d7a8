//! Error handling - every failure is rendered as a response envelope.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode};
use std::fmt;

use commune_core::{DomainError, RepoError};

use crate::handlers::respond::send_response;

/// Application-level error type.
///
/// The wrapped detail is logged, never sent: clients only see
/// `{"status":"ERROR"}` or `{"status":"Not found"}`.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    BadRequest(String),
    Persistence(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Not found"),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Persistence(msg) => write!(f, "Persistence error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            // Backend failures are reported as 400 like any other failed operation
            AppError::BadRequest(_) | AppError::Persistence(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => tracing::debug!("Resource not found"),
            AppError::BadRequest(detail) => tracing::debug!("Rejected request: {}", detail),
            AppError::Persistence(detail) => tracing::error!("Persistence error: {}", detail),
        }

        send_response::<()>(self.status_code(), None, &[])
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound,
            RepoError::Constraint(msg) => AppError::BadRequest(msg),
            RepoError::Connection(msg) => {
                AppError::Persistence(format!("database connection error: {}", msg))
            }
            RepoError::Query(msg) => AppError::Persistence(format!("database query error: {}", msg)),
        }
    }
}

/// Error handler for the JSON body extractor.
///
/// Malformed bodies, wrong content types and unknown update keys all end up
/// here and are answered with the standard 400 envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::{Value, json};

    async fn body_of(err: AppError) -> (StatusCode, Value) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_rt::test]
    async fn test_not_found_envelope() {
        let (status, body) = body_of(RepoError::NotFound.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "status": "Not found" }));
    }

    #[actix_rt::test]
    async fn test_persistence_error_hides_detail() {
        let err: AppError = RepoError::Connection("password authentication failed".into()).into();
        let (status, body) = body_of(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "status": "ERROR" }));
    }

    #[actix_rt::test]
    async fn test_validation_error_is_bad_request() {
        let err: AppError = DomainError::Validation("name is required".into()).into();
        let (status, body) = body_of(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "status": "ERROR" }));
    }

    #[test]
    fn test_constraint_maps_to_bad_request() {
        let err: AppError = RepoError::Constraint("duplicate slug".into()).into();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
