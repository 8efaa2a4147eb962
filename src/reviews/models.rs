use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::College;

/// Domain model representing a review in the database.
/// `user_name` is denormalized from the author at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub college_id: i32,
    pub user_name: String,
    pub rating: i16,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a new review.
/// Field presence is checked in the service so a missing field surfaces
/// as a 400 with the documented message.
#[derive(Debug, Deserialize, Validate, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub college_id: Option<i32>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i16>,
    pub comment: Option<String>,
}

/// Request DTO for updating an existing review
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i16>,
    pub comment: Option<String>,
}

/// A review assembled with the college it rates (user review listing)
#[derive(Debug, Serialize)]
pub struct ReviewWithCollege {
    #[serde(flatten)]
    pub review: Review,
    pub college: College,
}

/// Mutation response envelope for the review routes
#[derive(Debug, Serialize)]
pub struct ReviewMessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<Review>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_wire_names() {
        let json = r#"{"collegeId": 3, "rating": 5, "comment": "Excellent"}"#;
        let request: CreateReviewRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.college_id, Some(3));
        assert_eq!(request.rating, Some(5));
        assert_eq!(request.comment.as_deref(), Some("Excellent"));
    }

    #[test]
    fn test_rating_range_validation() {
        for rating in 1..=5i16 {
            let request = CreateReviewRequest {
                college_id: Some(1),
                rating: Some(rating),
                comment: Some("ok".to_string()),
            };
            assert!(request.validate().is_ok(), "rating {} should be valid", rating);
        }

        for rating in [0i16, 6] {
            let request = CreateReviewRequest {
                college_id: Some(1),
                rating: Some(rating),
                comment: Some("ok".to_string()),
            };
            assert!(request.validate().is_err(), "rating {} should be invalid", rating);
        }
    }

    #[test]
    fn test_review_serializes_camel_case() {
        let review = Review {
            id: 1,
            user_id: 2,
            college_id: 3,
            user_name: "Demo User".to_string(),
            rating: 5,
            comment: "Excellent university!".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&review).unwrap();
        assert!(json.contains("\"userId\":2"));
        assert!(json.contains("\"collegeId\":3"));
        assert!(json.contains("\"userName\":\"Demo User\""));
    }
}
