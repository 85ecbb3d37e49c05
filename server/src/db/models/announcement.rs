//! Announcement Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Announcement row — site-wide banner message
///
/// `active` 控制公开列表的可见性；管理列表始终返回全部
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Announcement {
    pub id: i64,
    pub message: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub active: bool,
    pub created_at: NaiveDateTime,
}

/// Announcement creation payload (`type` 缺省为 "info")
#[derive(Debug, Clone, Deserialize)]
pub struct AnnouncementCreate {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Announcement update payload — full replace of message/type/active
#[derive(Debug, Clone, Deserialize)]
pub struct AnnouncementUpdate {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub active: bool,
}
