//! Feedback Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Customer review record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    /// 1-5 stars
    pub rating: u8,
    pub comment: String,
    pub created_at: i64,
}
