//! Feedback service

use validator::Validate;

use crate::ClientResult;
use crate::http::RestClient;
use shared::models::{Feedback, FeedbackCreate};

pub struct FeedbackService<'a, C: RestClient> {
    client: &'a C,
}

impl<'a, C: RestClient> FeedbackService<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// All reviews, newest first (public)
    pub async fn list(&self) -> ClientResult<Vec<Feedback>> {
        self.client.get("/api/feedback").await
    }

    /// Submit a review (public)
    pub async fn submit(&self, review: &FeedbackCreate) -> ClientResult<Feedback> {
        review.validate()?;
        self.client.post("/api/feedback", review).await
    }

    /// Average rating across reviews, as shown on the reviews page
    pub fn average_rating(reviews: &[Feedback]) -> Option<f64> {
        if reviews.is_empty() {
            return None;
        }
        let total: u32 = reviews.iter().map(|r| r.rating as u32).sum();
        Some(total as f64 / reviews.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8) -> Feedback {
        Feedback {
            id: None,
            name: "Guest".to_string(),
            email: "guest@example.com".to_string(),
            rating,
            comment: "comment".to_string(),
            created_at: 0,
        }
    }

    #[test]
    fn test_average_rating() {
        assert_eq!(FeedbackService::<crate::HttpClient>::average_rating(&[]), None);
        let reviews = vec![review(5), review(4), review(3)];
        assert_eq!(
            FeedbackService::<crate::HttpClient>::average_rating(&reviews),
            Some(4.0)
        );
    }
}
