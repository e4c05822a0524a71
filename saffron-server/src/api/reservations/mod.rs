//! Reservation API 模块

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reservations", reservation_routes())
}

fn reservation_routes() -> Router<ServerState> {
    Router::new()
        // Guest booking - public
        .route("/book", post(handler::book))
        // Admin management
        .route("/all", get(handler::list))
        .route("/update-status", post(handler::update_status))
        .route("/delete", delete(handler::purge))
}
