use sqlx::PgPool;

use crate::models::College;
use crate::reviews::{error::ReviewError, models::Review};

const REVIEW_COLUMNS: &str =
    "id, user_id, college_id, user_name, rating, comment, created_at, updated_at";

/// Repository for database operations on reviews
#[derive(Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    /// Create a new ReviewRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new review
    pub async fn create(
        &self,
        user_id: i32,
        college_id: i32,
        user_name: &str,
        rating: i16,
        comment: &str,
    ) -> Result<Review, ReviewError> {
        let review = sqlx::query_as::<_, Review>(&format!(
            "INSERT INTO reviews (user_id, college_id, user_name, rating, comment)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {REVIEW_COLUMNS}"
        ))
        .bind(user_id)
        .bind(college_id)
        .bind(user_name)
        .bind(rating)
        .bind(comment)
        .fetch_one(&self.pool)
        .await?;

        Ok(review)
    }

    /// Find a review owned by a specific user
    pub async fn find_by_id_and_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<Review>, ReviewError> {
        let review = sqlx::query_as::<_, Review>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(review)
    }

    /// Find a review by user and college (duplicate detection)
    pub async fn find_by_user_and_college(
        &self,
        user_id: i32,
        college_id: i32,
    ) -> Result<Option<Review>, ReviewError> {
        let review = sqlx::query_as::<_, Review>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews WHERE user_id = $1 AND college_id = $2"
        ))
        .bind(user_id)
        .bind(college_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(review)
    }

    /// Apply present fields over an existing review
    pub async fn update(
        &self,
        id: i32,
        rating: Option<i16>,
        comment: Option<&str>,
    ) -> Result<Review, ReviewError> {
        let review = sqlx::query_as::<_, Review>(&format!(
            "UPDATE reviews
             SET rating = COALESCE($1, rating),
                 comment = COALESCE($2, comment),
                 updated_at = NOW()
             WHERE id = $3
             RETURNING {REVIEW_COLUMNS}"
        ))
        .bind(rating)
        .bind(comment)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(review)
    }

    /// Delete a review
    pub async fn delete(&self, id: i32) -> Result<(), ReviewError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ReviewError::NotFound);
        }

        Ok(())
    }

    /// All reviews for a college, newest first
    pub async fn find_by_college(&self, college_id: i32) -> Result<Vec<Review>, ReviewError> {
        let reviews = sqlx::query_as::<_, Review>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews
             WHERE college_id = $1
             ORDER BY created_at DESC"
        ))
        .bind(college_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }

    /// All reviews written by a user, newest first
    pub async fn find_by_user(&self, user_id: i32) -> Result<Vec<Review>, ReviewError> {
        let reviews = sqlx::query_as::<_, Review>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews
             WHERE user_id = $1
             ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }

    /// All rating values for a college (average calculation)
    pub async fn get_ratings_for_college(&self, college_id: i32) -> Result<Vec<i16>, ReviewError> {
        let ratings: Vec<(i16,)> =
            sqlx::query_as("SELECT rating FROM reviews WHERE college_id = $1")
                .bind(college_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(ratings.into_iter().map(|(r,)| r).collect())
    }

    /// Persist a recomputed rating onto the college record
    pub async fn update_college_rating(
        &self,
        college_id: i32,
        rating: f64,
    ) -> Result<(), ReviewError> {
        sqlx::query("UPDATE colleges SET rating = $1, updated_at = NOW() WHERE id = $2")
            .bind(rating)
            .bind(college_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Check if a college exists
    pub async fn college_exists(&self, college_id: i32) -> Result<bool, ReviewError> {
        let exists: Option<bool> =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM colleges WHERE id = $1)")
                .bind(college_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists.unwrap_or(false))
    }

    /// Fetch the author's profile name and email for denormalization
    pub async fn find_user_identity(
        &self,
        user_id: i32,
    ) -> Result<Option<(Option<String>, String)>, ReviewError> {
        let identity: Option<(Option<String>, String)> =
            sqlx::query_as("SELECT name, email FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(identity)
    }

    /// Fetch a college record for response assembly
    pub async fn find_college(&self, college_id: i32) -> Result<Option<College>, ReviewError> {
        let college = sqlx::query_as::<_, College>("SELECT * FROM colleges WHERE id = $1")
            .bind(college_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(college)
    }
}
