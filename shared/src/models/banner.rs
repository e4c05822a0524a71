//! Banner Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Home page carousel banner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    pub id: Option<String>,
    pub image: String,
    pub title: String,
    pub description: String,
    pub active: bool,
    #[serde(default)]
    pub sort_order: i32,
    pub created_at: i64,
}

/// Create banner payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BannerCreate {
    #[validate(length(min = 1, max = 2048, message = "Image URL is required"))]
    pub image: String,
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,
    #[validate(length(max = 300, message = "Description cannot exceed 300 characters"))]
    pub description: String,
    /// New banners default to active, matching the admin form
    pub active: Option<bool>,
    pub sort_order: Option<i32>,
}

/// Update banner payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct BannerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 2048, message = "Image URL is required"))]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 300, message = "Description cannot exceed 300 characters"))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}
