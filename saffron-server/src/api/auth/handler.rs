//! Authentication Handlers
//!
//! Handles login, logout, and session info

use std::time::Duration;

use axum::{Extension, Json, extract::State};
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::AdminUserRepository;
use crate::security_log;
use crate::utils::AppError;

use shared::client::{LoginRequest, LoginResponse, UserInfo};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login handler
///
/// Authenticates admin credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    req.validate()?;

    let repo = AdminUserRepository::new(state.get_db());
    let email = req.email.clone();

    let user = repo.find_by_email(&email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Check authentication result - unified error message to prevent email enumeration
    let user = match user {
        Some(u) => {
            // Account found - check active status
            if !u.is_active {
                return Err(AppError::forbidden("Account has been disabled".to_string()));
            }

            // Verify password
            let password_valid = u
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                security_log!("WARN", "login_failed", email = email.clone(), reason = "invalid_credentials");
                tracing::warn!(email = %email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            u
        }
        None => {
            security_log!("WARN", "login_failed", email = email.clone(), reason = "account_not_found");
            tracing::warn!(email = %email, "Login failed - account not found");
            return Err(AppError::invalid_credentials());
        }
    };

    // Generate JWT token
    let jwt_service = state.jwt_service();
    let user_id = user.id.as_ref().map(|t| t.to_string()).unwrap_or_default();

    let token = jwt_service
        .generate_token(&user_id, &user.email, &user.display_name, &user.role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    security_log!("INFO", "login_success", user_id = user_id.clone(), email = user.email.clone());
    tracing::info!(
        user_id = %user_id,
        email = %user.email,
        role = %user.role,
        "User logged in successfully"
    );

    let response = LoginResponse {
        token,
        user: UserInfo {
            id: user_id,
            email: user.email,
            display_name: user.display_name,
            role: user.role,
            is_active: user.is_active,
        },
    };

    Ok(Json(response))
}

/// Get current user info
pub async fn me(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<UserInfo>, AppError> {
    // Query fresh account data for is_active
    let repo = AdminUserRepository::new(state.get_db());
    let account = repo.find_by_id(&user.id).await?;

    let is_active = account.map(|a| a.is_active).unwrap_or(false);

    let user_info = UserInfo {
        id: user.id,
        email: user.email,
        display_name: user.display_name,
        role: user.role,
        is_active,
    };

    Ok(Json(user_info))
}

/// Logout handler
pub async fn logout(
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<()>, AppError> {
    security_log!("INFO", "logout", user_id = user.id.clone(), email = user.email.clone());

    tracing::info!(
        user_id = %user.id,
        email = %user.email,
        "User logged out"
    );

    Ok(Json(()))
}
