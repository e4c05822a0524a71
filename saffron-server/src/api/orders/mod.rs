//! Order API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", order_routes())
}

fn order_routes() -> Router<ServerState> {
    Router::new()
        // Guest flow - public
        .route("/place", post(handler::place))
        .route("/{id}", get(handler::get_by_id))
        // Admin management
        .route("/", get(handler::list))
        .route("/update-status", post(handler::update_status))
}
