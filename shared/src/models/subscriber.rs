//! Mailing List Subscriber Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Coming-soon mailing list entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: Option<String>,
    pub email: String,
    pub created_at: i64,
}

/// Subscribe payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubscribeRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
}
