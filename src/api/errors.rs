//! API error type mapped to HTTP status codes.
//!
//! Every failure renders as `{"message": "…"}`:
//! - `BadRequest` → 400 (payload rejected by the validator)
//! - `Internal` → 500 (index unreachable or failing)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use storefront_core::validator::ValidationError;
use storefront_remote::RemoteError;

pub const INTERNAL_MESSAGE: &str = "Internal Server Error";

#[derive(Debug)]
pub enum ApiError {
    /// Invalid filter payload (400).
    BadRequest(String),
    /// Unexpected server or backend failure (500).
    Internal(String),
}

impl ApiError {
    /// Collapse into the single generic failure older clients expect.
    pub fn flattened(self) -> Self {
        ApiError::Internal(INTERNAL_MESSAGE.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<RemoteError> for ApiError {
    fn from(err: RemoteError) -> Self {
        // Backend details stay in the server log.
        tracing::error!(error = %err, "vector index query failed");
        ApiError::Internal(INTERNAL_MESSAGE.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg,
        };
        (status, axum::Json(json!({ "message": message }))).into_response()
    }
}
