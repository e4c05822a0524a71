//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 认证相关接口
//! - [`menu`] - 菜单管理接口
//! - [`banners`] - 首页横幅接口
//! - [`reservations`] - 预订接口
//! - [`orders`] - 订单接口
//! - [`feedback`] - 顾客评价接口
//! - [`subscribe`] - 邮件订阅接口
//! - [`stats`] - 后台统计接口
//! - [`upload`] - 图片上传接口

pub mod auth;
pub mod banners;
pub mod feedback;
pub mod health;
pub mod menu;
pub mod orders;
pub mod reservations;
pub mod stats;
pub mod subscribe;
pub mod upload;

pub mod router_ext;
pub use router_ext::{OneshotResult, OneshotRouter};

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Auth API
        .merge(auth::router())
        // Site content
        .merge(menu::router())
        .merge(banners::router())
        // Guest-facing flows
        .merge(reservations::router())
        .merge(orders::router())
        .merge(feedback::router())
        .merge(subscribe::router())
        // Admin dashboard
        .merge(stats::router())
        .merge(upload::router())
        // Health API - public route
        .merge(health::router())
}

/// Build a fully configured application with all middleware
///
/// This is used by both the HTTP server and oneshot calls
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // ========== Tower HTTP Middleware ==========
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // ========== Application Middleware ==========
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // Get user context (JWT authentication) - executes before routes, injects CurrentUser
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_auth,
        ))
}
