//! Gallery API 模块

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/gallery", get(handler::list))
        .route("/api/admin/gallery", post(handler::create))
        .route("/api/admin/gallery/{id}", delete(handler::delete))
}
