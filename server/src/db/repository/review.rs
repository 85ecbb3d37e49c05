//! Review Repository

use super::RepoResult;
use crate::db::models::{Review, ReviewCreate};
use sqlx::SqlitePool;

/// Find all reviews, newest first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Review>> {
    let reviews = sqlx::query_as::<_, Review>(
        "SELECT * FROM reviews ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(reviews)
}

/// Create a new review
pub async fn create(pool: &SqlitePool, data: ReviewCreate) -> RepoResult<Review> {
    let review = sqlx::query_as::<_, Review>(
        "INSERT INTO reviews (name, rating, comment) VALUES (?, ?, ?) RETURNING *",
    )
    .bind(&data.name)
    .bind(data.rating)
    .bind(&data.comment)
    .fetch_one(pool)
    .await?;
    Ok(review)
}
