//! Feedback Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Customer review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    /// 1-5 stars
    pub rating: u8,
    pub comment: String,
    pub created_at: i64,
}

/// Submit review payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeedbackCreate {
    #[validate(length(min = 1, max = 50, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be 1-5"))]
    pub rating: u8,
    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub comment: String,
}
