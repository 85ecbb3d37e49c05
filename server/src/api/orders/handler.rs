//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::api::parse_id;
use crate::core::ServerState;
use crate::db::models::{Order, OrderCreate, OrderStatusUpdate};
use crate::db::repository::order;
use crate::utils::{AppError, AppResult, MessageResponse};

/// 创建订单的响应 - 前端只关心生成的追踪号
#[derive(Debug, Serialize)]
pub struct OrderCreated {
    pub tracking_id: String,
}

/// POST /api/admin/orders - 创建订单并生成追踪号
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<OrderCreated>)> {
    let created = order::create(&state.pool, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(OrderCreated {
            tracking_id: created.tracking_id,
        }),
    ))
}

/// GET /api/admin/orders - 获取所有订单 (最新优先)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = order::find_all(&state.pool).await?;
    Ok(Json(orders))
}

/// PATCH /api/admin/orders/:id - 更新订单状态
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id, "order")?;
    order::update_status(&state.pool, id, &payload.status).await?;
    Ok(Json(MessageResponse::new("Order status updated")))
}

/// DELETE /api/admin/orders/:id - 删除订单
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id, "order")?;
    order::delete(&state.pool, id).await?;
    Ok(Json(MessageResponse::new("Order deleted")))
}

/// GET /api/track/:tracking_id - 公开的包裹追踪查询
///
/// 追踪号不存在时返回 404，不区分 "从未存在" 与 "已删除"
pub async fn track(
    State(state): State<ServerState>,
    Path(tracking_id): Path<String>,
) -> AppResult<Json<Order>> {
    let found = order::find_by_tracking_id(&state.pool, &tracking_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Parcel not found".to_string()))?;
    Ok(Json(found))
}
