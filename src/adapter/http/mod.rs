//! Inbound HTTP adapter: the REST surface over the core.

mod handlers;
mod server;

pub use server::ApiServer;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::Error;

/// Error wrapper mapping the crate taxonomy onto HTTP responses.
///
/// - not-found → 404 (distinct from transient failure, per the error
///   design)
/// - validation → 422 with the full field-keyed issue list
/// - extraction → 422 with a retry-the-upload message
/// - everything else → 500 with a generic body
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            Error::NotFound { id } => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("bet not found: {id}") })),
            )
                .into_response(),
            Error::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": "validation failed", "issues": err.issues })),
            )
                .into_response(),
            Error::Extraction(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": err.to_string(), "retry": true })),
            )
                .into_response(),
            other => {
                tracing::error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal error" })),
                )
                    .into_response()
            }
        }
    }
}
