//! Gallery API Handlers
//!
//! 图片以 base64 data URL 直接存在行内，请求体上限由
//! 服务器层的 DefaultBodyLimit 控制。

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::parse_id;
use crate::core::ServerState;
use crate::db::models::{GalleryItem, GalleryItemCreate};
use crate::db::repository::gallery;
use crate::utils::{AppResult, MessageResponse};

/// GET /api/gallery - 获取画廊图片 (最新优先，公开)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<GalleryItem>>> {
    let items = gallery::find_all(&state.pool).await?;
    Ok(Json(items))
}

/// POST /api/admin/gallery - 添加图片
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<GalleryItemCreate>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    gallery::create(&state.pool, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Image added to gallery")),
    ))
}

/// DELETE /api/admin/gallery/:id - 删除图片
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id, "gallery")?;
    gallery::delete(&state.pool, id).await?;
    Ok(Json(MessageResponse::new("Image deleted from gallery")))
}
