use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use service::auth::errors::AuthError;
use service::errors::ServiceError;

/// Boundary error: everything a handler can fail with, mapped exhaustively
/// onto a status code and a JSON `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Service(e) => match e {
                ServiceError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
                ServiceError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
                ServiceError::Db(msg) => {
                    error!(error = %msg, "unexpected store failure");
                    (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
                }
            },
            ApiError::Auth(e) => match e {
                AuthError::InvalidCredentials
                | AuthError::TokenMissing
                | AuthError::TokenMalformed
                | AuthError::TokenExpired
                | AuthError::TokenInvalid => (StatusCode::UNAUTHORIZED, e.to_string()),
                AuthError::Conflict => (StatusCode::CONFLICT, e.to_string()),
                AuthError::HashError(msg) | AuthError::TokenError(msg) | AuthError::Repository(msg) => {
                    error!(code = e.code(), error = %msg, "unexpected auth failure");
                    (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
                }
            },
        };
        (status, Json(serde_json::json!({ "error": msg }))).into_response()
    }
}
