//! Order Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Order row — a confirmed shipment
///
/// `tracking_id` 是唯一的对外句柄，公开查询接口只认它。
/// `status` 是自由文本：界面限制词表，存储层不做任何约束。
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub tracking_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub pickup: String,
    pub delivery: String,
    pub weight: String,
    pub description: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
}

/// Order creation payload (tracking_id 由服务端生成)
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub pickup: String,
    pub delivery: String,
    pub weight: String,
    pub description: Option<String>,
}

/// Status update payload
#[derive(Debug, Clone, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: String,
}
