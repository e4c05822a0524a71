//! Order Model
//!
//! Online orders with per-line price snapshots. Totals are always computed
//! server-side from the stored menu prices.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Order lifecycle state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Legal transitions: processing -> completed | cancelled
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!((self, next), (Processing, Completed) | (Processing, Cancelled))
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Customer details attached to an order
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderCustomer {
    #[validate(length(min = 2, max = 50, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 7, max = 15, message = "Invalid phone format"))]
    pub phone: String,
}

/// Order line with menu item snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    /// Menu item reference ("menu_item:...")
    pub menu_item: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub line_total: Decimal,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Option<String>,
    pub customer: OrderCustomer,
    pub items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(default)]
    pub note: Option<String>,
    pub status: OrderStatus,
    pub created_at: i64,
}

/// One requested line in a place-order request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItemInput {
    #[validate(length(min = 1, message = "Menu item is required"))]
    pub menu_item: String,
    #[validate(range(min = 1, max = 50, message = "Quantity must be 1-50"))]
    pub quantity: u32,
}

/// Place order payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlaceOrderRequest {
    #[validate(nested)]
    pub customer: OrderCustomer,
    #[validate(
        length(min = 1, message = "Order must contain at least one item"),
        nested
    )]
    pub items: Vec<OrderItemInput>,
    #[validate(length(max = 500, message = "Note cannot exceed 500 characters"))]
    pub note: Option<String>,
}

/// Admin status update request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub order_id: String,
    pub status: OrderStatus,
}
