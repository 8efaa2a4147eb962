use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::error::ApiError;

/// Type alias for the PostgreSQL connection pool
pub type DbPool = PgPool;

/// Creates and configures a PostgreSQL connection pool
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    tracing::debug!("Creating database connection pool");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await?;

    tracing::info!("Database connection pool created successfully");
    Ok(pool)
}

/// Check whether a college with the given id exists
pub async fn college_exists(pool: &PgPool, id: i32) -> Result<bool, ApiError> {
    let exists: Option<bool> =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM colleges WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;

    Ok(exists.unwrap_or(false))
}
