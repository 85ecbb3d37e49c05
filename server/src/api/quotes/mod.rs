//! Quote API 模块

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/quotes", post(handler::create))
        .route("/api/admin/quotes", get(handler::list))
        .route("/api/admin/quotes/{id}", delete(handler::delete))
}
