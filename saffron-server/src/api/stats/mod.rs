//! Stats API 模块

mod handler;

use axum::{Router, middleware as axum_middleware, routing::get};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/stats/dashboard", get(handler::dashboard))
        .layer(axum_middleware::from_fn(require_admin))
}
