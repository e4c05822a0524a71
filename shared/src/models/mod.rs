//! Data models
//!
//! Shared between saffron-server and the website/admin frontends (via API).
//! Record IDs are serialized as `"table:id"` strings by the server; the
//! client-facing types here carry them as plain `String`s.

pub mod banner;
pub mod feedback;
pub mod menu_item;
pub mod order;
pub mod reservation;
pub mod subscriber;

// Re-exports
pub use banner::*;
pub use feedback::*;
pub use menu_item::*;
pub use order::*;
pub use reservation::*;
pub use subscriber::*;
