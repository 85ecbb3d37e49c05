//! Admin Stats Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::stats;
use crate::utils::AppResult;

/// 仪表盘统计 - 前端约定 camelCase 键名
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(rename = "totalOrders")]
    pub total_orders: i64,
    #[serde(rename = "pendingOrders")]
    pub pending_orders: i64,
    #[serde(rename = "deliveredOrders")]
    pub delivered_orders: i64,
    #[serde(rename = "totalQuotes")]
    pub total_quotes: i64,
}

/// GET /api/admin/stats - 仪表盘计数
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<StatsResponse>> {
    let counts = stats::counts(&state.pool).await?;
    Ok(Json(StatsResponse {
        total_orders: counts.total_orders,
        pending_orders: counts.pending_orders,
        delivered_orders: counts.delivered_orders,
        total_quotes: counts.total_quotes,
    }))
}
