//! Banner API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use http::StatusCode;
use serde::Deserialize;
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::Banner;
use crate::db::repository::BannerRepository;
use crate::utils::AppResult;

use shared::models::{BannerCreate, BannerUpdate};

/// Query params for the banner listing
#[derive(Debug, Deserialize)]
pub struct BannerQuery {
    /// `?active=true` narrows to carousel-ready banners
    pub active: Option<bool>,
}

/// GET /api/banners - 横幅列表 (首页轮播传 ?active=true)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<BannerQuery>,
) -> AppResult<Json<Vec<Banner>>> {
    let repo = BannerRepository::new(state.get_db());
    let banners = if query.active.unwrap_or(false) {
        repo.find_active().await?
    } else {
        repo.find_all().await?
    };
    Ok(Json(banners))
}

/// POST /api/banners - 创建横幅
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BannerCreate>,
) -> AppResult<(StatusCode, Json<Banner>)> {
    payload.validate()?;

    let repo = BannerRepository::new(state.get_db());
    let banner = repo.create(payload).await?;

    tracing::info!(
        id = %banner.id.as_ref().map(|i| i.to_string()).unwrap_or_default(),
        title = %banner.title,
        "Banner created"
    );

    Ok((StatusCode::CREATED, Json(banner)))
}

/// PUT /api/banners/:id - 更新横幅
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BannerUpdate>,
) -> AppResult<Json<Banner>> {
    payload.validate()?;

    let repo = BannerRepository::new(state.get_db());
    let banner = repo.update(&id, payload).await?;

    tracing::info!(id = %id, title = %banner.title, "Banner updated");

    Ok(Json(banner))
}

/// POST /api/banners/:id/toggle - 切换横幅激活状态
pub async fn toggle(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Banner>> {
    let repo = BannerRepository::new(state.get_db());
    let banner = repo.toggle_active(&id).await?;

    tracing::info!(id = %id, active = banner.active, "Banner toggled");

    Ok(Json(banner))
}

/// DELETE /api/banners/:id - 删除横幅
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = BannerRepository::new(state.get_db());
    repo.delete(&id).await?;

    tracing::info!(id = %id, "Banner deleted");

    Ok(Json(true))
}
