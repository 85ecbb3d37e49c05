//! Order Repository
//!
//! 订单创建时服务端生成追踪号。生成空间为 base-36 的 8 位 (约 2.8e12)，
//! 碰撞概率极低但不为零：插入撞上 UNIQUE 约束时换号重试，而不是把
//! 约束冲突当成普通失败抛给调用方。

use super::{RepoError, RepoResult};
use crate::db::models::{Order, OrderCreate};
use rand::Rng;
use sqlx::SqlitePool;

/// Tracking id: "ZC-" + 8 uppercase base-36 characters
const TRACKING_PREFIX: &str = "ZC-";
const TRACKING_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const TRACKING_SUFFIX_LEN: usize = 8;

/// UNIQUE 冲突时的重试上限
const MAX_TRACKING_ATTEMPTS: u32 = 5;

/// Generate a fresh tracking id
pub fn generate_tracking_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..TRACKING_SUFFIX_LEN)
        .map(|_| TRACKING_ALPHABET[rng.gen_range(0..TRACKING_ALPHABET.len())] as char)
        .collect();
    format!("{TRACKING_PREFIX}{suffix}")
}

/// Find all orders, newest first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(
        "SELECT * FROM orders ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

/// Exact-match lookup by tracking id (public endpoint)
pub async fn find_by_tracking_id(
    pool: &SqlitePool,
    tracking_id: &str,
) -> RepoResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE tracking_id = ?")
        .bind(tracking_id)
        .fetch_optional(pool)
        .await?;
    Ok(order)
}

/// Create a new order with a server-generated tracking id
///
/// Retries with a fresh id on a UNIQUE violation, bounded by
/// [`MAX_TRACKING_ATTEMPTS`].
pub async fn create(pool: &SqlitePool, data: OrderCreate) -> RepoResult<Order> {
    for _ in 0..MAX_TRACKING_ATTEMPTS {
        let tracking_id = generate_tracking_id();
        let result = sqlx::query_as::<_, Order>(
            "INSERT INTO orders (tracking_id, name, email, phone, pickup, delivery, weight, description) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&tracking_id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.pickup)
        .bind(&data.delivery)
        .bind(&data.weight)
        .bind(&data.description)
        .fetch_one(pool)
        .await;

        match result {
            Ok(order) => return Ok(order),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                tracing::warn!(tracking_id = %tracking_id, "Tracking id collision, regenerating");
                continue;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Err(RepoError::Database(
        "Exhausted tracking id generation attempts".to_string(),
    ))
}

/// Replace the status string — no transition rules, any string overwrites any other
pub async fn update_status(pool: &SqlitePool, id: i64, status: &str) -> RepoResult<()> {
    let result = sqlx::query("UPDATE orders SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound("Order not found".to_string()));
    }
    Ok(())
}

/// Hard delete an order
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let result = sqlx::query("DELETE FROM orders WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound("Order not found".to_string()));
    }
    Ok(())
}
