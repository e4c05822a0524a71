//! Order Model
//!
//! 订单行内嵌菜单项快照，菜单项被修改或下架后历史订单仍然完整。

use super::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{OrderCustomer, OrderStatus};
use surrealdb::RecordId;

/// Order line with menu item snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    /// Menu item reference as "menu_item:id" string snapshot
    pub menu_item: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub line_total: Decimal,
}

/// Order record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub customer: OrderCustomer,
    pub items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(default)]
    pub note: Option<String>,
    pub status: OrderStatus,
    pub created_at: i64,
}
