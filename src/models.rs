use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::reviews::models::Review;

/// A college catalog entry.
///
/// `rating` is derived: it always holds the one-decimal mean of the
/// college's current reviews (0 when there are none) and is rewritten by
/// the review mutation paths.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct College {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Stanford University")]
    pub name: String,
    #[schema(example = "Stanford, California")]
    pub location: String,
    #[schema(example = "A leading research university")]
    pub description: String,
    #[schema(example = 4.8, minimum = 0.0, maximum = 5.0)]
    pub rating: f64,
    #[schema(example = "/stanford-university-campus.png")]
    pub image: String,
    #[serde(rename = "type")]
    #[schema(example = "Private University")]
    pub college_type: String,
    #[schema(example = 1885)]
    pub established: Option<i32>,
    pub affiliations: Vec<String>,
    pub courses: Vec<String>,
    pub facilities: Vec<String>,
    #[schema(example = 55000.0)]
    pub tuition_fee: f64,
    pub gallery: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a college.
///
/// name/location/description presence is checked in the handler so a
/// missing field surfaces as a 400 with the documented message; every
/// other field falls back to a catalog default.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollege {
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[schema(example = 4.5, minimum = 0.0, maximum = 5.0)]
    pub rating: Option<f64>,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub college_type: Option<String>,
    pub established: Option<i32>,
    pub affiliations: Option<Vec<String>>,
    pub courses: Option<Vec<String>>,
    pub facilities: Option<Vec<String>>,
    pub tuition_fee: Option<f64>,
    pub gallery: Option<Vec<String>>,
}

/// Request body for updating a college. All fields optional; omitted
/// fields keep their stored values.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCollege {
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub college_type: Option<String>,
    pub established: Option<i32>,
    pub affiliations: Option<Vec<String>>,
    pub courses: Option<Vec<String>>,
    pub facilities: Option<Vec<String>>,
    pub tuition_fee: Option<f64>,
    pub gallery: Option<Vec<String>>,
}

/// College detail response: the record plus its full review list
#[derive(Debug, Serialize, ToSchema)]
pub struct CollegeWithReviews {
    #[serde(flatten)]
    pub college: College,
    pub reviews: Vec<Review>,
}

/// Mutation response envelope for the college routes
#[derive(Debug, Serialize, ToSchema)]
pub struct CollegeMessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college: Option<College>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_college() -> College {
        College {
            id: 1,
            name: "MIT".to_string(),
            location: "Cambridge, Massachusetts".to_string(),
            description: "World-renowned institution".to_string(),
            rating: 4.9,
            image: "/mit-campus.png".to_string(),
            college_type: "Private University".to_string(),
            established: Some(1861),
            affiliations: vec!["AAU".to_string()],
            courses: vec!["Engineering".to_string()],
            facilities: vec!["Research Labs".to_string()],
            tuition_fee: 53000.0,
            gallery: vec!["/mit-campus.png".to_string()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_college_serialization_uses_wire_names() {
        let json = serde_json::to_string(&sample_college()).unwrap();

        assert!(json.contains("\"type\":\"Private University\""));
        assert!(json.contains("\"tuitionFee\":53000.0"));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("college_type"));
    }

    #[test]
    fn test_create_college_deserialization() {
        let json = r#"{
            "name": "MIT",
            "location": "Cambridge, Massachusetts",
            "description": "World-renowned institution",
            "type": "Private University",
            "tuitionFee": 53000,
            "courses": ["Engineering", "Physics"]
        }"#;

        let create: CreateCollege = serde_json::from_str(json).unwrap();
        assert_eq!(create.name.as_deref(), Some("MIT"));
        assert_eq!(create.college_type.as_deref(), Some("Private University"));
        assert_eq!(create.tuition_fee, Some(53000.0));
        assert_eq!(
            create.courses,
            Some(vec!["Engineering".to_string(), "Physics".to_string()])
        );
        assert!(create.rating.is_none());
    }

    #[test]
    fn test_update_college_empty_body_deserializes() {
        let update: UpdateCollege = serde_json::from_str("{}").unwrap();
        assert!(update.name.is_none());
        assert!(update.rating.is_none());
        assert!(update.gallery.is_none());
    }

    #[test]
    fn test_college_with_reviews_flattens() {
        let detail = CollegeWithReviews {
            college: sample_college(),
            reviews: vec![],
        };

        let value = serde_json::to_value(&detail).unwrap();
        // Review list sits alongside the college's own fields
        assert_eq!(value["name"], "MIT");
        assert!(value["reviews"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_message_response_omits_absent_college() {
        let response = CollegeMessageResponse {
            message: "College deleted successfully".to_string(),
            college: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("college"));
    }
}
