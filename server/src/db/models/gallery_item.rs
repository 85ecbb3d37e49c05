//! Gallery Item Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Gallery row — caller-supplied encoded image payload plus optional caption
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GalleryItem {
    pub id: i64,
    pub image_data: String,
    pub caption: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Gallery creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryItemCreate {
    pub image_data: String,
    pub caption: Option<String>,
}
