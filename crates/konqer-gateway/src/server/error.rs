//! API error taxonomy
//!
//! Every failure surfaces as structured JSON with a fixed machine-readable
//! `error` code so consumers can branch on it; never free text or a trace.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors the catalog API returns to clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested slug has no matching descriptor
    #[error("service not found")]
    NotFound,
}

impl ApiError {
    /// Stable machine-readable error code
    fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound => "not_found",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.code() }))).into_response()
    }
}
