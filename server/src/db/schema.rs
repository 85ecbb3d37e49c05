//! Schema Definition
//!
//! 五张扁平表，启动时以 CREATE TABLE IF NOT EXISTS 幂等创建。
//! 没有迁移引擎：结构变更需要人工介入。

use sqlx::SqlitePool;

/// Idempotent DDL for the five tables
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS quotes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    pickup TEXT NOT NULL,
    delivery TEXT NOT NULL,
    weight TEXT NOT NULL,
    description TEXT,
    status TEXT DEFAULT 'Pending',
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS orders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tracking_id TEXT UNIQUE NOT NULL,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    pickup TEXT NOT NULL,
    delivery TEXT NOT NULL,
    weight TEXT NOT NULL,
    description TEXT,
    status TEXT DEFAULT 'Pending',
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS reviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    rating INTEGER NOT NULL,
    comment TEXT NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS gallery (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    image_data TEXT NOT NULL,
    caption TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS announcements (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    message TEXT NOT NULL,
    type TEXT DEFAULT 'info',
    active INTEGER DEFAULT 1,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);
"#;

/// Create the five tables if they do not exist yet
pub async fn init(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let db = DbService::new_in_memory()
            .await
            .expect("Failed to open in-memory database");

        // new_in_memory already ran init once; a second run must not fail
        init(&db.pool).await.expect("Second init failed");

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN \
             ('quotes', 'orders', 'reviews', 'gallery', 'announcements')",
        )
        .fetch_one(&db.pool)
        .await
        .expect("Failed to count tables");

        assert_eq!(count, 5);
    }
}
