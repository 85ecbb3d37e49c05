//! Quote Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Quote row — an unconfirmed shipping request
///
/// 创建后不可修改，只能删除；没有更新接口
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Quote {
    pub id: i64,
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

/// Quote creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub pickup: String,
    pub delivery: String,
    pub weight: String,
    pub description: Option<String>,
}
