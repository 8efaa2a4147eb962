// HTTP handlers for review endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::auth::middleware::AuthenticatedUser;
use crate::reviews::{
    error::ReviewError,
    models::{
        CreateReviewRequest, Review, ReviewMessageResponse, ReviewWithCollege,
        UpdateReviewRequest,
    },
};
use crate::AppState;

/// Create a new review
/// POST /api/reviews
pub async fn create_review_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewMessageResponse>), ReviewError> {
    let review = state
        .review_service
        .create_review(user.user_id, request)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReviewMessageResponse {
            message: "Review created successfully".to_string(),
            review: Some(review),
        }),
    ))
}

/// Update an existing review
/// PUT /api/reviews/:id
pub async fn update_review_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(review_id): Path<i32>,
    Json(request): Json<UpdateReviewRequest>,
) -> Result<Json<ReviewMessageResponse>, ReviewError> {
    let review = state
        .review_service
        .update_review(review_id, user.user_id, request)
        .await?;

    Ok(Json(ReviewMessageResponse {
        message: "Review updated successfully".to_string(),
        review: Some(review),
    }))
}

/// Delete a review
/// DELETE /api/reviews/:id
pub async fn delete_review_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(review_id): Path<i32>,
) -> Result<Json<ReviewMessageResponse>, ReviewError> {
    state
        .review_service
        .delete_review(review_id, user.user_id)
        .await?;

    Ok(Json(ReviewMessageResponse {
        message: "Review deleted successfully".to_string(),
        review: None,
    }))
}

/// All reviews for a college, newest first (public)
/// GET /api/reviews/college/:collegeId
pub async fn get_reviews_for_college_handler(
    State(state): State<AppState>,
    Path(college_id): Path<i32>,
) -> Result<Json<Vec<Review>>, ReviewError> {
    let reviews = state.review_service.reviews_for_college(college_id).await?;
    Ok(Json(reviews))
}

/// The caller's reviews, college-joined, newest first
/// GET /api/reviews/user
pub async fn get_user_reviews_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<ReviewWithCollege>>, ReviewError> {
    let reviews = state.review_service.reviews_by_user(user.user_id).await?;
    Ok(Json(reviews))
}
