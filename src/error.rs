// Error handling for the college catalog surface
// Every failure renders as a JSON body { "error": "<message>" }

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

/// Main error type for the college routes.
/// Handlers return Result<T, ApiError>.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input, maps to HTTP 400
    #[error("{0}")]
    Validation(String),

    /// Dangling identifier, maps to HTTP 404
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// Store failure, maps to HTTP 500. Detail goes to the log only.
    #[error("Internal server error")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Validation(msg) => debug!("Validation error: {}", msg),
            ApiError::NotFound { resource } => debug!("{} not found", resource),
            ApiError::Database(e) => error!("Database error: {:?}", e),
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
