//! Rating submission orchestration.

use crate::error::{Error, Result};
use crate::rating::{Rating, RatingRepository};

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

/// Rating manager.
#[derive(Clone)]
pub struct RatingService {
    repo: RatingRepository,
}

impl RatingService {
    /// Create a new [`RatingService`].
    pub fn new(repo: RatingRepository) -> Self {
        Self { repo }
    }

    /// Validate and persist one rating, returning the stored record.
    pub fn rate_movie(
        &self,
        movie_id: &str,
        user_email: &str,
        score: u8,
        review: &str,
    ) -> Result<Rating> {
        if movie_id.trim().is_empty() || user_email.trim().is_empty() {
            return Err(Error::Validation(
                "invalid movie or user reference".into(),
            ));
        }
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(Error::Validation(format!(
                "score must be between {MIN_SCORE} and {MAX_SCORE}"
            )));
        }
        if review.trim().is_empty() {
            return Err(Error::Validation("a review is required".into()));
        }

        let rating = Rating {
            movie_id: movie_id.to_owned(),
            user_email: user_email.to_owned(),
            score,
            review: review.trim().to_owned(),
        };

        self.repo.save(rating.clone()).map_err(|err| {
            Error::Validation(format!("could not save the rating: {err}"))
        })?;

        Ok(rating)
    }

    /// All ratings submitted by `email`, in insertion order.
    pub fn ratings_for_user(&self, email: &str) -> Vec<Rating> {
        self.repo.find_by_user(email)
    }
}
