//! Review Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Review row
///
/// 无审核流程，提交后立即公开可见；存储层不限制评分区间
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Review {
    pub id: i64,
    pub name: String,
    pub rating: i64,
    pub comment: String,
    pub created_at: NaiveDateTime,
}

/// Review creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewCreate {
    pub name: String,
    pub rating: i64,
    pub comment: String,
}
