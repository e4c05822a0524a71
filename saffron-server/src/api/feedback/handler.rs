//! Feedback API Handlers

use axum::{Json, extract::State};
use http::StatusCode;
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::Feedback;
use crate::db::repository::FeedbackRepository;
use crate::utils::AppResult;

use shared::models::FeedbackCreate;

/// GET /api/feedback - 评价列表 (公开，最新优先)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Feedback>>> {
    let repo = FeedbackRepository::new(state.get_db());
    let reviews = repo.find_all().await?;
    Ok(Json(reviews))
}

/// POST /api/feedback - 提交评价 (公开)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<FeedbackCreate>,
) -> AppResult<(StatusCode, Json<Feedback>)> {
    payload.validate()?;

    let repo = FeedbackRepository::new(state.get_db());
    let review = repo.create(payload).await?;

    tracing::info!(
        id = %review.id.as_ref().map(|i| i.to_string()).unwrap_or_default(),
        rating = review.rating,
        "Feedback submitted"
    );

    Ok((StatusCode::CREATED, Json(review)))
}
