//! Error taxonomy shared across the migration service.
//!
//! Every failure surfaced by this service falls into one of the variants of
//! [`ApiError`]. The Spotify client translates provider failures into this
//! taxonomy at the boundary; the matching and normalization code is total and
//! never fails; the orchestration layer only propagates or downgrades.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// A referenced local resource is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// A duplicate title or name was detected.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Malformed identifier or input.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Credential rejected or session expired.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Network or rate-limit failure; the caller may retry.
    #[error("transient upstream failure: {0}")]
    Transient(String),

    /// Unexpected provider response shape or provider-side error.
    #[error("unexpected upstream response: {0}")]
    Upstream(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::Transient(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
