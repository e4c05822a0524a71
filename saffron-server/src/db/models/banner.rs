//! Banner Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Home page carousel banner record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub image: String,
    pub title: String,
    pub description: String,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub active: bool,
    #[serde(default)]
    pub sort_order: i32,
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}
