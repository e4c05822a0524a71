//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use rust_decimal::Decimal;
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::order::{Order, OrderItem};
use crate::db::repository::{MenuItemRepository, OrderRepository, now_ts};
use crate::utils::{AppError, AppResult};

use shared::models::{OrderStatus, PlaceOrderRequest, UpdateOrderStatusRequest};

/// POST /api/orders/place - 下单 (公开)
///
/// 订单行按菜单当前价格生成快照，合计由服务端计算。
pub async fn place(
    State(state): State<ServerState>,
    Json(payload): Json<PlaceOrderRequest>,
) -> AppResult<(StatusCode, Json<Order>)> {
    payload.validate()?;

    let menu_repo = MenuItemRepository::new(state.get_db());

    let mut items: Vec<OrderItem> = Vec::with_capacity(payload.items.len());
    let mut total = Decimal::ZERO;

    for line in &payload.items {
        let menu_item = menu_repo
            .find_by_id(&line.menu_item)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Menu item {}", line.menu_item)))?;

        if !menu_item.is_available {
            return Err(AppError::business_rule(format!(
                "'{}' is currently not available",
                menu_item.name
            )));
        }

        let quantity = Decimal::from(line.quantity);
        let line_total = menu_item.price * quantity;
        total += line_total;

        items.push(OrderItem {
            menu_item: menu_item
                .id
                .as_ref()
                .map(|i| i.to_string())
                .unwrap_or_else(|| line.menu_item.clone()),
            name: menu_item.name,
            unit_price: menu_item.price,
            quantity: line.quantity,
            line_total,
        });
    }

    let order = Order {
        id: None,
        customer: payload.customer,
        items,
        total,
        note: payload.note,
        status: OrderStatus::Processing,
        created_at: now_ts(),
    };

    let repo = OrderRepository::new(state.get_db());
    let order = repo.create(order).await?;

    tracing::info!(
        id = %order.id.as_ref().map(|i| i.to_string()).unwrap_or_default(),
        total = %order.total,
        lines = order.items.len(),
        "Order placed"
    );

    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/orders/:id - 订单跟踪 (公开，按订单号查询)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.get_db());
    let order = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {}", id)))?;
    Ok(Json(order))
}

/// GET /api/orders - 后台订单列表
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.get_db());
    let orders = repo.find_all().await?;
    Ok(Json(orders))
}

/// POST /api/orders/update-status - 变更订单状态
///
/// 非法状态转换返回 422。
pub async fn update_status(
    State(state): State<ServerState>,
    Json(req): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.get_db());

    let existing = repo
        .find_by_id(&req.order_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {}", req.order_id)))?;

    if !existing.status.can_transition_to(req.status) {
        return Err(AppError::business_rule(format!(
            "Cannot move order from '{}' to '{}'",
            existing.status, req.status
        )));
    }

    let order = repo.set_status(&req.order_id, req.status).await?;

    tracing::info!(
        id = %req.order_id,
        from = %existing.status,
        to = %req.status,
        "Order status updated"
    );

    Ok(Json(order))
}
