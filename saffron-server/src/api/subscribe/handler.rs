//! Subscribe API Handlers

use axum::{Json, extract::State};
use http::StatusCode;
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::Subscriber;
use crate::db::repository::SubscriberRepository;
use crate::utils::AppResult;

use shared::models::SubscribeRequest;

/// POST /api/subscribe - 加入上新通知邮件列表 (公开)
pub async fn subscribe(
    State(state): State<ServerState>,
    Json(payload): Json<SubscribeRequest>,
) -> AppResult<(StatusCode, Json<Subscriber>)> {
    payload.validate()?;

    let repo = SubscriberRepository::new(state.get_db());
    let subscriber = repo.create(&payload.email).await?;

    tracing::info!(email = %subscriber.email, "New mailing list subscriber");

    Ok((StatusCode::CREATED, Json(subscriber)))
}
