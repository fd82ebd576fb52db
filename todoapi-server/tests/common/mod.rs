//! Shared Postgres fixture for the database-backed test binaries.

use sqlx::PgPool;
use todoapi_server::create_pool;

const SCHEMA: &str = include_str!("../fixtures/schema.sql");

/// Pool on `DATABASE_URL` with an empty `todos` table and ids reset.
pub async fn fresh_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = create_pool(&url).await.expect("pool creation failed");

    sqlx::query(SCHEMA).execute(&pool).await.expect("schema");
    sqlx::query("TRUNCATE todos RESTART IDENTITY")
        .execute(&pool)
        .await
        .expect("truncate");
    pool
}
