//! Review API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::db::models::{Review, ReviewCreate};
use crate::db::repository::review;
use crate::utils::{AppResult, MessageResponse};

/// GET /api/reviews - 获取所有评价 (最新优先，公开)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Review>>> {
    let reviews = review::find_all(&state.pool).await?;
    Ok(Json(reviews))
}

/// POST /api/reviews - 提交评价 (公开)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReviewCreate>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    review::create(&state.pool, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Review submitted")),
    ))
}
