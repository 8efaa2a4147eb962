use crate::reviews::{error::ReviewError, repository::ReviewRepository};

/// Calculator for the derived college rating
#[derive(Clone)]
pub struct RatingCalculator {
    repository: ReviewRepository,
}

/// Arithmetic mean of the ratings rounded to one decimal; 0.0 when the
/// college has no reviews left.
pub fn average_rating(ratings: &[i16]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }

    let sum: i32 = ratings.iter().map(|&r| r as i32).sum();
    let mean = sum as f64 / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}

impl RatingCalculator {
    /// Create a new RatingCalculator
    pub fn new(repository: ReviewRepository) -> Self {
        Self { repository }
    }

    /// Recalculate and persist the rating for a college.
    ///
    /// Fetches every current rating, takes the one-decimal mean, and
    /// rewrites the college record. Concurrent reviewers race this
    /// read-modify-write; last writer wins.
    pub async fn recalculate(&self, college_id: i32) -> Result<f64, ReviewError> {
        let ratings = self.repository.get_ratings_for_college(college_id).await?;
        let rating = average_rating(&ratings);

        self.repository
            .update_college_rating(college_id, rating)
            .await?;

        tracing::debug!(
            "Recomputed rating {} for college {} over {} reviews",
            rating,
            college_id,
            ratings.len()
        );

        Ok(rating)
    }
}
