//! Menu API 模块

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/menu", menu_routes())
}

fn menu_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/featured", get(handler::featured))
        .route("/all", get(handler::list_all))
        .route("/{id}", put(handler::update).delete(handler::delete))
}
