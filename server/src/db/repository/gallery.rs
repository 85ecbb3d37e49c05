//! Gallery Repository

use super::{RepoError, RepoResult};
use crate::db::models::{GalleryItem, GalleryItemCreate};
use sqlx::SqlitePool;

/// Find all gallery items, newest first
///
/// 图片负载内联返回，无分页 — 数据集很小，可以接受
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<GalleryItem>> {
    let items = sqlx::query_as::<_, GalleryItem>(
        "SELECT * FROM gallery ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(items)
}

/// Create a new gallery item
pub async fn create(pool: &SqlitePool, data: GalleryItemCreate) -> RepoResult<GalleryItem> {
    let item = sqlx::query_as::<_, GalleryItem>(
        "INSERT INTO gallery (image_data, caption) VALUES (?, ?) RETURNING *",
    )
    .bind(&data.image_data)
    .bind(&data.caption)
    .fetch_one(pool)
    .await?;
    Ok(item)
}

/// Hard delete a gallery item
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let result = sqlx::query("DELETE FROM gallery WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(
            "Image not found in gallery".to_string(),
        ));
    }
    Ok(())
}
