//! Admin Stats Aggregation
//!
//! 每次调用现算四个计数，无缓存。状态按字面量匹配：
//! "Arrived" 的订单既不算 pending 也不算 delivered。

use super::RepoResult;
use sqlx::SqlitePool;

/// The four dashboard counts
#[derive(Debug, Clone, Copy)]
pub struct StatsCounts {
    pub total_orders: i64,
    pub pending_orders: i64,
    pub delivered_orders: i64,
    pub total_quotes: i64,
}

/// Compute the dashboard counts
pub async fn counts(pool: &SqlitePool) -> RepoResult<StatsCounts> {
    let total_orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await?;
    let pending_orders: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE status = 'Pending'")
            .fetch_one(pool)
            .await?;
    let delivered_orders: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE status = 'Delivered'")
            .fetch_one(pool)
            .await?;
    let total_quotes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quotes")
        .fetch_one(pool)
        .await?;

    Ok(StatsCounts {
        total_orders,
        pending_orders,
        delivered_orders,
        total_quotes,
    })
}
