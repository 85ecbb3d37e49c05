//! Order API 模块
//!
//! 管理端的订单 CRUD 加上公开的包裹追踪查询

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/track/{tracking_id}", get(handler::track))
        .route(
            "/api/admin/orders",
            get(handler::list).post(handler::create),
        )
        .route(
            "/api/admin/orders/{id}",
            patch(handler::update_status).delete(handler::delete),
        )
}
