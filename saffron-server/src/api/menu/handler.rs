//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::MenuItem;
use crate::db::repository::MenuItemRepository;
use crate::utils::{AppError, AppResult};

use shared::models::{MenuItemCreate, MenuItemUpdate, is_menu_category};

/// Query params for the public menu listing
#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub category: Option<String>,
}

/// GET /api/menu - 公开菜单 (仅在售菜品，可按分类过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<MenuQuery>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.get_db());

    let items = match query.category.as_deref() {
        Some(category) if category != "all" => {
            if !is_menu_category(category) {
                return Err(AppError::validation(format!(
                    "Unknown menu category '{category}'"
                )));
            }
            repo.find_by_category(category).await?
        }
        _ => repo.find_available().await?,
    };

    Ok(Json(items))
}

/// GET /api/menu/featured - 首页推荐菜品
pub async fn featured(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.get_db());
    let items = repo.find_featured().await?;
    Ok(Json(items))
}

/// GET /api/menu/all - 后台完整菜单 (含已下架菜品)
pub async fn list_all(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.get_db());
    let items = repo.find_all().await?;
    Ok(Json(items))
}

/// POST /api/menu - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    payload.validate()?;

    let repo = MenuItemRepository::new(state.get_db());
    let item = repo.create(payload).await?;

    tracing::info!(
        id = %item.id.as_ref().map(|i| i.to_string()).unwrap_or_default(),
        name = %item.name,
        "Menu item created"
    );

    Ok(Json(item))
}

/// PUT /api/menu/:id - 更新菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    payload.validate()?;
    payload
        .validate_business()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = MenuItemRepository::new(state.get_db());
    let item = repo.update(&id, payload).await?;

    tracing::info!(id = %id, name = %item.name, "Menu item updated");

    Ok(Json(item))
}

/// DELETE /api/menu/:id - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = MenuItemRepository::new(state.get_db());
    repo.delete(&id).await?;

    tracing::info!(id = %id, "Menu item deleted");

    Ok(Json(true))
}
