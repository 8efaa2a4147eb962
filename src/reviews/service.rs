use validator::Validate;

use crate::reviews::{
    error::ReviewError,
    models::{CreateReviewRequest, Review, ReviewWithCollege, UpdateReviewRequest},
    rating_calculator::RatingCalculator,
    repository::ReviewRepository,
};

/// Service layer for review business logic
#[derive(Clone)]
pub struct ReviewService {
    repository: ReviewRepository,
    rating_calculator: RatingCalculator,
}

impl ReviewService {
    /// Create a new ReviewService
    pub fn new(repository: ReviewRepository, rating_calculator: RatingCalculator) -> Self {
        Self {
            repository,
            rating_calculator,
        }
    }

    /// Create a new review
    ///
    /// 1. Checks presence of collegeId, rating, and comment
    /// 2. Validates the rating range
    /// 3. Verifies the college and the author's user record exist
    /// 4. Rejects a second review for the same (user, college) pair
    /// 5. Creates the review with the author's name denormalized
    /// 6. Recomputes the college's rating
    pub async fn create_review(
        &self,
        user_id: i32,
        request: CreateReviewRequest,
    ) -> Result<Review, ReviewError> {
        let (Some(college_id), Some(rating), Some(comment)) = (
            request.college_id,
            request.rating,
            request.comment.as_deref(),
        ) else {
            return Err(ReviewError::ValidationError(
                "College ID, rating, and comment are required".to_string(),
            ));
        };

        if !(1..=5).contains(&rating) {
            return Err(ReviewError::ValidationError(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        if !self.repository.college_exists(college_id).await? {
            return Err(ReviewError::CollegeNotFound);
        }

        let (name, email) = self
            .repository
            .find_user_identity(user_id)
            .await?
            .ok_or(ReviewError::UserNotFound)?;

        if self
            .repository
            .find_by_user_and_college(user_id, college_id)
            .await?
            .is_some()
        {
            return Err(ReviewError::DuplicateReview);
        }

        // OAuth users may carry no profile name
        let user_name = name.unwrap_or(email);

        let review = self
            .repository
            .create(user_id, college_id, &user_name, rating, comment)
            .await?;

        self.rating_calculator.recalculate(college_id).await?;

        Ok(review)
    }

    /// Update an existing review and recompute the college's rating
    pub async fn update_review(
        &self,
        review_id: i32,
        user_id: i32,
        request: UpdateReviewRequest,
    ) -> Result<Review, ReviewError> {
        request
            .validate()
            .map_err(|_| ReviewError::ValidationError("Rating must be between 1 and 5".to_string()))?;

        // Absent and not-owned are indistinguishable to the caller
        let existing = self
            .repository
            .find_by_id_and_user(review_id, user_id)
            .await?
            .ok_or(ReviewError::NotFound)?;

        let updated = self
            .repository
            .update(review_id, request.rating, request.comment.as_deref())
            .await?;

        self.rating_calculator
            .recalculate(existing.college_id)
            .await?;

        Ok(updated)
    }

    /// Delete a review and recompute the college's rating
    pub async fn delete_review(&self, review_id: i32, user_id: i32) -> Result<(), ReviewError> {
        let existing = self
            .repository
            .find_by_id_and_user(review_id, user_id)
            .await?
            .ok_or(ReviewError::NotFound)?;

        let college_id = existing.college_id;

        self.repository.delete(review_id).await?;

        self.rating_calculator.recalculate(college_id).await?;

        Ok(())
    }

    /// All reviews for a college, newest first
    pub async fn reviews_for_college(&self, college_id: i32) -> Result<Vec<Review>, ReviewError> {
        self.repository.find_by_college(college_id).await
    }

    /// The caller's reviews assembled with their colleges, newest first
    pub async fn reviews_by_user(&self, user_id: i32) -> Result<Vec<ReviewWithCollege>, ReviewError> {
        let reviews = self.repository.find_by_user(user_id).await?;

        let mut assembled = Vec::with_capacity(reviews.len());
        for review in reviews {
            let college = self
                .repository
                .find_college(review.college_id)
                .await?
                .ok_or(ReviewError::CollegeNotFound)?;
            assembled.push(ReviewWithCollege { review, college });
        }

        Ok(assembled)
    }
}
