//! Announcement API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::parse_id;
use crate::core::ServerState;
use crate::db::models::{Announcement, AnnouncementCreate, AnnouncementUpdate};
use crate::db::repository::announcement;
use crate::utils::{AppError, AppResult, MessageResponse};

/// GET /api/announcements - 获取激活的公告 (公开)
pub async fn list_active(State(state): State<ServerState>) -> AppResult<Json<Vec<Announcement>>> {
    let data = announcement::find_active(&state.pool).await?;
    Ok(Json(data))
}

/// GET /api/admin/announcements - 获取全部公告 (含未激活)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Announcement>>> {
    let data = announcement::find_all(&state.pool).await?;
    Ok(Json(data))
}

/// POST /api/admin/announcements - 创建公告 (type 缺省为 info)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AnnouncementCreate>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    if payload.message.trim().is_empty() {
        return Err(AppError::Validation("Message is required".to_string()));
    }
    announcement::create(&state.pool, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Announcement created")),
    ))
}

/// PATCH /api/admin/announcements/:id - 整体替换公告内容
///
/// message/type/active 三个字段全量更新，不做部分合并
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<AnnouncementUpdate>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id, "announcement")?;
    announcement::update(&state.pool, id, payload).await?;
    Ok(Json(MessageResponse::new("Announcement updated")))
}

/// DELETE /api/admin/announcements/:id - 删除公告
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id, "announcement")?;
    announcement::delete(&state.pool, id).await?;
    Ok(Json(MessageResponse::new("Announcement deleted")))
}
