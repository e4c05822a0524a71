//! Per-resource API services
//!
//! One service per backend resource, mirroring the screens that call them:
//! menu browsing, the home page carousel, the booking form, online orders,
//! reviews and the coming-soon mailing list, plus the admin session.

pub mod auth;
pub mod banners;
pub mod feedback;
pub mod menu;
pub mod orders;
pub mod reservations;
pub mod subscribe;

pub use auth::AuthService;
pub use banners::BannerService;
pub use feedback::FeedbackService;
pub use menu::MenuService;
pub use orders::OrderService;
pub use reservations::ReservationService;
pub use subscribe::SubscribeService;
