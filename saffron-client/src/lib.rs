//! Saffron Client
//!
//! Typed API client for the Saffron restaurant platform: a small HTTP
//! client wrapper plus per-resource services (menu, banners, reservations,
//! orders, feedback, auth) that the website and admin frontends call.
//!
//! Create payloads are schema-validated locally before they are sent, the
//! way the site validates its forms before submitting.
//!
//! # Example
//!
//! ```ignore
//! use saffron_client::{ClientConfig, services::MenuService};
//!
//! let client = ClientConfig::new("http://localhost:3000").build_http_client();
//! let menu = MenuService::new(&client).list(None).await?;
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod services;
pub mod token;

#[cfg(feature = "in-process")]
pub mod local;

// Re-export main types
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, RestClient};
pub use token::TokenStore;

#[cfg(feature = "in-process")]
pub use local::OneshotHttpClient;

// Shared DTOs the services speak
pub use shared::client::{LoginRequest, LoginResponse, UserInfo};
