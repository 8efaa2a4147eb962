use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Service-level errors for the review system
#[derive(Debug)]
pub enum ReviewError {
    /// Review not found (or not owned by the caller)
    NotFound,

    /// User has already reviewed this college
    DuplicateReview,

    /// Validation error with details
    ValidationError(String),

    /// College being reviewed does not exist
    CollegeNotFound,

    /// Authenticated subject no longer maps to a user
    UserNotFound,

    /// Database error
    DatabaseError(sqlx::Error),
}

impl fmt::Display for ReviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewError::NotFound => write!(f, "Review not found"),
            ReviewError::DuplicateReview => {
                write!(f, "You have already reviewed this college")
            }
            ReviewError::ValidationError(msg) => write!(f, "{}", msg),
            ReviewError::CollegeNotFound => write!(f, "College not found"),
            ReviewError::UserNotFound => write!(f, "User not found"),
            ReviewError::DatabaseError(e) => write!(f, "Database error: {}", e),
        }
    }
}

impl std::error::Error for ReviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReviewError::DatabaseError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for ReviewError {
    fn from(err: sqlx::Error) -> Self {
        ReviewError::DatabaseError(err)
    }
}

impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ReviewError::NotFound => (StatusCode::NOT_FOUND, "Review not found".to_string()),
            // Duplicate reviews are a 400 on this API, not a 409
            ReviewError::DuplicateReview => (
                StatusCode::BAD_REQUEST,
                "You have already reviewed this college".to_string(),
            ),
            ReviewError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            ReviewError::CollegeNotFound => {
                (StatusCode::NOT_FOUND, "College not found".to_string())
            }
            ReviewError::UserNotFound => (StatusCode::NOT_FOUND, "User not found".to_string()),
            ReviewError::DatabaseError(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
