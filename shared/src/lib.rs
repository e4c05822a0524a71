//! Shared types for the Saffron restaurant platform
//!
//! Common types used by both saffron-server and saffron-client:
//! data models, request/response DTOs, status transition tables and
//! the schema validation applied on both sides of the wire.

pub mod client;
pub mod models;
pub mod money;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{LoginRequest, LoginResponse, UserInfo};
pub use models::{
    Banner, BannerCreate, BannerUpdate, Feedback, FeedbackCreate, MenuItem, MenuItemCreate,
    MenuItemUpdate, Order, OrderCustomer, OrderItem, OrderItemInput, OrderStatus,
    PlaceOrderRequest, Reservation, ReservationCreate, ReservationStatus, SubscribeRequest,
    Subscriber, UpdateOrderStatusRequest, UpdateReservationStatusRequest,
};
pub use money::format_euro;
