//! Announcement API 模块
//!
//! 公开端只返回 active 的公告，管理端返回全部

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/announcements", get(handler::list_active))
        .route(
            "/api/admin/announcements",
            get(handler::list).post(handler::create),
        )
        .route(
            "/api/admin/announcements/{id}",
            patch(handler::update).delete(handler::delete),
        )
}
