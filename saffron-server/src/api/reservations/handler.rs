//! Reservation API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::Reservation;
use crate::db::repository::ReservationRepository;
use crate::utils::validation::{validate_booking_date, validate_service_slot};
use crate::utils::{AppError, AppResult};

use shared::models::{ReservationCreate, ReservationStatus, UpdateReservationStatusRequest};

/// POST /api/reservations/book - 提交预订 (公开)
pub async fn book(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    payload.validate()?;
    validate_booking_date(&payload.date)?;
    validate_service_slot(&payload.time)?;

    let repo = ReservationRepository::new(state.get_db());
    let reservation = repo.create(payload).await?;

    tracing::info!(
        id = %reservation.id.as_ref().map(|i| i.to_string()).unwrap_or_default(),
        date = %reservation.date,
        time = %reservation.time,
        guests = reservation.guests,
        "Reservation booked"
    );

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// Query params for the admin listing window
#[derive(Debug, Deserialize)]
pub struct ReservationQuery {
    /// Only reservations created in the last N hours
    pub last_num_hours: Option<i64>,
    /// Optional status filter
    pub status: Option<ReservationStatus>,
}

/// GET /api/reservations/all - 后台预订列表
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ReservationQuery>,
) -> AppResult<Json<Vec<Reservation>>> {
    let repo = ReservationRepository::new(state.get_db());
    let reservations = repo.find_window(query.last_num_hours, query.status).await?;
    Ok(Json(reservations))
}

/// POST /api/reservations/update-status - 变更预订状态
///
/// 非法状态转换返回 422。
pub async fn update_status(
    State(state): State<ServerState>,
    Json(req): Json<UpdateReservationStatusRequest>,
) -> AppResult<Json<Reservation>> {
    let repo = ReservationRepository::new(state.get_db());

    let existing = repo
        .find_by_id(&req.reservation_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {}", req.reservation_id)))?;

    if !existing.status.can_transition_to(req.status) {
        return Err(AppError::business_rule(format!(
            "Cannot move reservation from '{}' to '{}'",
            existing.status, req.status
        )));
    }

    let reservation = repo.set_status(&req.reservation_id, req.status).await?;

    tracing::info!(
        id = %req.reservation_id,
        from = %existing.status,
        to = %req.status,
        "Reservation status updated"
    );

    Ok(Json(reservation))
}

/// Query params for the retention purge
#[derive(Debug, Deserialize)]
pub struct PurgeQuery {
    /// Delete reservations created more than N hours ago
    pub hours: Option<i64>,
}

/// Purge response
#[derive(Debug, Serialize)]
pub struct PurgeResponse {
    pub deleted: usize,
    pub message: String,
}

/// DELETE /api/reservations/delete - 清理过期预订记录
pub async fn purge(
    State(state): State<ServerState>,
    Query(query): Query<PurgeQuery>,
) -> AppResult<Json<PurgeResponse>> {
    let hours = query
        .hours
        .unwrap_or(state.config.reservation_retention_hours);
    if hours < 0 {
        return Err(AppError::validation("hours must be non-negative"));
    }

    let repo = ReservationRepository::new(state.get_db());
    let deleted = repo.purge_older_than(hours).await?;

    tracing::info!(hours, deleted, "Purged old reservations");

    Ok(Json(PurgeResponse {
        deleted,
        message: format!("Deleted {deleted} reservations older than {hours} hours"),
    }))
}
