use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::auth::models::UserResponse;
use crate::models::College;

/// Booking status enum representing the lifecycle of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
}

impl BookingStatus {
    /// Convert status to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Rejected => "rejected",
        }
    }

    /// Parse status from string
    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "approved" => Ok(BookingStatus::Approved),
            "rejected" => Ok(BookingStatus::Rejected),
            _ => Err(format!("Invalid booking status: {}", s)),
        }
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An admission application in the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub college_id: i32,
    pub student_name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub previous_education: String,
    pub grade: String,
    pub address: String,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a booking. Required-field presence is checked
/// in the service so a missing field surfaces as a 400 with the documented
/// message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub college_id: Option<i32>,
    pub student_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub course: Option<String>,
    pub previous_education: Option<String>,
    pub grade: Option<String>,
    pub address: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
}

/// Request DTO for updating a booking. `status` arrives as a plain string
/// and is parsed in the service so an unknown value yields the documented
/// "Invalid status value" message rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub student_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub course: Option<String>,
    pub previous_education: Option<String>,
    pub grade: Option<String>,
    pub address: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub status: Option<String>,
}

/// Request DTO for the admin status update (status only)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: Option<String>,
}

/// A booking assembled with its college
#[derive(Debug, Serialize)]
pub struct BookingWithCollege {
    #[serde(flatten)]
    pub booking: Booking,
    pub college: College,
}

/// A booking assembled with its college and its owner (admin listing)
#[derive(Debug, Serialize)]
pub struct AdminBooking {
    #[serde(flatten)]
    pub booking: Booking,
    pub college: College,
    pub user: UserResponse,
}

/// Mutation response envelope for the booking routes
#[derive(Debug, Serialize)]
pub struct BookingMessageResponse<T: Serialize> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Approved,
            BookingStatus::Rejected,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!(BookingStatus::parse("cancelled").is_err());
        assert!(BookingStatus::parse("PENDING").is_err());
        assert!(BookingStatus::parse("").is_err());
    }

    #[test]
    fn test_default_status_is_pending() {
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
    }

    #[test]
    fn test_status_wire_format_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Approved).unwrap(),
            "\"approved\""
        );
    }

    #[test]
    fn test_create_request_wire_names() {
        let json = r#"{
            "collegeId": 2,
            "studentName": "Jane Doe",
            "email": "jane@example.com",
            "phone": "+1234567890",
            "course": "Computer Science",
            "previousEducation": "High School",
            "grade": "A",
            "address": "42 Elm Street",
            "guardianName": "John Doe"
        }"#;

        let request: CreateBookingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.college_id, Some(2));
        assert_eq!(request.student_name.as_deref(), Some("Jane Doe"));
        assert_eq!(request.previous_education.as_deref(), Some("High School"));
        assert_eq!(request.guardian_name.as_deref(), Some("John Doe"));
        assert!(request.guardian_phone.is_none());
    }

    #[test]
    fn test_update_request_status_stays_a_string() {
        // Unknown status values must deserialize; the service rejects them
        let json = r#"{"status": "cancelled"}"#;
        let request: UpdateBookingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.status.as_deref(), Some("cancelled"));
    }
}
