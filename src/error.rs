//! Centralized mapping from application errors to HTTP responses.
//!
//! Handlers return `Result<_, ApiError>`; the [`IntoResponse`] impl is the
//! single place where service errors become status codes:
//!
//! - validation failures -> 400
//! - missing records -> 404
//! - everything else (provider and store failures) -> 500, cause logged,
//!   body masked

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::service::ServiceError;

/// HTTP-facing error for all request handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or invalid required input
    #[error("{0}")]
    Validation(String),

    /// Anything the service layer reports
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::Service(ServiceError::NotFound(id)) => {
                (StatusCode::NOT_FOUND, format!("song {id} not found")).into_response()
            }
            ApiError::Service(err) => {
                tracing::error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
                    .into_response()
            }
        }
    }
}
