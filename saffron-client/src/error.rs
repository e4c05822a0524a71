//! Client error types

use serde::Deserialize;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Resource conflict (duplicate booking, duplicate name...)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule rejected the request (illegal status transition...)
    #[error("Rejected: {0}")]
    Rejected(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Error body shape the server answers with
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Extract the user-facing message from an error response body
pub(crate) fn server_message(text: &str) -> String {
    serde_json::from_str::<ErrorBody>(text)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| text.to_string())
}

/// Map an error status + body to a [`ClientError`]
pub(crate) fn status_to_error(status: http::StatusCode, text: String) -> ClientError {
    let message = server_message(&text);
    match status {
        http::StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        http::StatusCode::FORBIDDEN => ClientError::Forbidden(message),
        http::StatusCode::NOT_FOUND => ClientError::NotFound(message),
        http::StatusCode::CONFLICT => ClientError::Conflict(message),
        http::StatusCode::BAD_REQUEST => ClientError::Validation(message),
        http::StatusCode::UNPROCESSABLE_ENTITY => ClientError::Rejected(message),
        _ => ClientError::Internal(message),
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(e: validator::ValidationErrors) -> Self {
        let message = e
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |err| match &err.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Invalid value for '{}'", field),
                })
            })
            .next()
            .unwrap_or_else(|| "Validation failed".to_string());
        ClientError::Validation(message)
    }
}
