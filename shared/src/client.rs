//! Client-related types shared between server and client
//!
//! Common request/response types used in API communication.
//! These types are shared between saffron-server and saffron-client.

use serde::{Deserialize, Serialize};
use validator::Validate;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request (admin dashboard signs in by email)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub role: String,
    pub is_active: bool,
}
