//! Menu Item Model

use super::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Menu item record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Category slug (see `shared::models::menu_item::MENU_CATEGORIES`)
    pub category: String,
    pub image: String,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub featured: bool,
    #[serde(default)]
    pub dietary: Vec<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub is_available: bool,
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}
