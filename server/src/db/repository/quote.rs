//! Quote Repository

use super::RepoResult;
use crate::db::models::{Quote, QuoteCreate};
use sqlx::SqlitePool;

/// Find all quotes, newest first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Quote>> {
    let quotes = sqlx::query_as::<_, Quote>(
        "SELECT * FROM quotes ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(quotes)
}

/// Create a new quote (status defaults to 'Pending')
pub async fn create(pool: &SqlitePool, data: QuoteCreate) -> RepoResult<Quote> {
    let quote = sqlx::query_as::<_, Quote>(
        "INSERT INTO quotes (name, email, phone, pickup, delivery, weight, description) \
         VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING *",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.pickup)
    .bind(&data.delivery)
    .bind(&data.weight)
    .bind(&data.description)
    .fetch_one(pool)
    .await?;
    Ok(quote)
}

/// Hard delete a quote
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let result = sqlx::query("DELETE FROM quotes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(super::RepoError::NotFound("Quote not found".to_string()));
    }
    Ok(())
}
