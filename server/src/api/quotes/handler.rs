//! Quote API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::parse_id;
use crate::core::ServerState;
use crate::db::models::{Quote, QuoteCreate};
use crate::db::repository::quote;
use crate::utils::{AppResult, MessageResponse};

/// POST /api/quotes - 提交报价请求 (公开)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<QuoteCreate>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    quote::create(&state.pool, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Quote request submitted successfully")),
    ))
}

/// GET /api/admin/quotes - 获取所有报价请求 (最新优先)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Quote>>> {
    let quotes = quote::find_all(&state.pool).await?;
    Ok(Json(quotes))
}

/// DELETE /api/admin/quotes/:id - 删除报价请求
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id, "quote")?;
    quote::delete(&state.pool, id).await?;
    Ok(Json(MessageResponse::new("Quote deleted")))
}
