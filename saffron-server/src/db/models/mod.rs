//! Database Models
//!
//! Storage-side records. IDs are SurrealDB [`surrealdb::RecordId`]s
//! serialized as `"table:id"` strings so the shared client-facing types can
//! carry them as plain strings.

// Serde helpers
pub mod serde_helpers;

// Auth
pub mod admin_user;

// Site content
pub mod banner;
pub mod menu_item;

// Guest-facing records
pub mod feedback;
pub mod order;
pub mod reservation;
pub mod subscriber;

// Re-exports
pub use admin_user::{AdminUser, AdminUserId};
pub use banner::Banner;
pub use feedback::Feedback;
pub use menu_item::MenuItem;
pub use order::Order;
pub use reservation::Reservation;
pub use subscriber::Subscriber;
