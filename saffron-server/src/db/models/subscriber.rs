//! Mailing List Subscriber Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Coming-soon mailing list entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub email: String,
    pub created_at: i64,
}
