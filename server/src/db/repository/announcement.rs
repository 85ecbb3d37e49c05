//! Announcement Repository

use super::{RepoError, RepoResult};
use crate::db::models::{Announcement, AnnouncementCreate, AnnouncementUpdate};
use sqlx::SqlitePool;

/// Find active announcements, newest first (public listing)
pub async fn find_active(pool: &SqlitePool) -> RepoResult<Vec<Announcement>> {
    let rows = sqlx::query_as::<_, Announcement>(
        "SELECT * FROM announcements WHERE active = 1 ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Find all announcements regardless of the active flag (admin listing)
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Announcement>> {
    let rows = sqlx::query_as::<_, Announcement>(
        "SELECT * FROM announcements ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Create a new announcement (`type` falls back to "info")
pub async fn create(pool: &SqlitePool, data: AnnouncementCreate) -> RepoResult<Announcement> {
    let kind = data.kind.unwrap_or_else(|| "info".to_string());
    let row = sqlx::query_as::<_, Announcement>(
        "INSERT INTO announcements (message, type) VALUES (?, ?) RETURNING *",
    )
    .bind(&data.message)
    .bind(&kind)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Full replace of message/type/active
pub async fn update(pool: &SqlitePool, id: i64, data: AnnouncementUpdate) -> RepoResult<()> {
    let result = sqlx::query(
        "UPDATE announcements SET message = ?, type = ?, active = ? WHERE id = ?",
    )
    .bind(&data.message)
    .bind(&data.kind)
    .bind(data.active)
    .bind(id)
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound("Announcement not found".to_string()));
    }
    Ok(())
}

/// Hard delete an announcement
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let result = sqlx::query("DELETE FROM announcements WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound("Announcement not found".to_string()));
    }
    Ok(())
}
