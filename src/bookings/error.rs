use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Service-level errors for the booking system
#[derive(Debug)]
pub enum BookingError {
    /// Booking not found (or not owned by the caller)
    NotFound,

    /// Status value outside pending/approved/rejected
    InvalidStatus,

    /// Validation error with details
    ValidationError(String),

    /// College being applied to does not exist
    CollegeNotFound,

    /// Database error
    DatabaseError(sqlx::Error),
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingError::NotFound => write!(f, "Booking not found"),
            BookingError::InvalidStatus => write!(f, "Invalid status value"),
            BookingError::ValidationError(msg) => write!(f, "{}", msg),
            BookingError::CollegeNotFound => write!(f, "College not found"),
            BookingError::DatabaseError(e) => write!(f, "Database error: {}", e),
        }
    }
}

impl std::error::Error for BookingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BookingError::DatabaseError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for BookingError {
    fn from(err: sqlx::Error) -> Self {
        BookingError::DatabaseError(err)
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            BookingError::NotFound => (StatusCode::NOT_FOUND, "Booking not found".to_string()),
            BookingError::InvalidStatus => {
                (StatusCode::BAD_REQUEST, "Invalid status value".to_string())
            }
            BookingError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            BookingError::CollegeNotFound => {
                (StatusCode::NOT_FOUND, "College not found".to_string())
            }
            BookingError::DatabaseError(e) => {
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
