//! Stats API Handlers
//!
//! Aggregated counts behind the admin dashboard cards.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::{MenuItemRepository, OrderRepository, ReservationRepository};
use crate::utils::AppResult;

/// Dashboard card values
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_orders: i64,
    pub pending_reservations: i64,
    pub total_menu_items: i64,
    /// Completed order revenue
    pub revenue: f64,
}

/// GET /api/stats/dashboard - 后台概览统计
pub async fn dashboard(State(state): State<ServerState>) -> AppResult<Json<DashboardStats>> {
    let order_repo = OrderRepository::new(state.get_db());
    let reservation_repo = ReservationRepository::new(state.get_db());
    let menu_repo = MenuItemRepository::new(state.get_db());

    let (total_orders, revenue) = order_repo.dashboard_totals().await?;
    let pending_reservations = reservation_repo.count_pending().await?;
    let total_menu_items = menu_repo.count().await?;

    Ok(Json(DashboardStats {
        total_orders,
        pending_reservations,
        total_menu_items,
        revenue,
    }))
}
