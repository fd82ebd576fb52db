//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool is built once
//! at startup, cloned into request state, and closed after the server drains.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, PgPool};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a free connection.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool tuning knobs exposed to the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the database is unreachable.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/todos").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, PoolSettings::default()).await
}

/// Create a PostgreSQL connection pool with custom options.
///
/// The pool is pinged once before being returned so that a bad URL or a
/// down database fails startup rather than the first request.
pub async fn create_pool_with_options(
    database_url: &str,
    settings: PoolSettings,
) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(database_url)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "unable to connect to database"))?;

    ping_pool(&pool).await?;

    tracing::info!(
        max_connections = settings.max_connections,
        "connected to database"
    );
    Ok(pool)
}

/// Check out one connection and ping it. Each failing step is logged.
pub async fn ping_pool(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut conn = pool
        .acquire()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "unable to acquire database connection"))?;

    conn.ping()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "unable to ping database"))
}

/// Close the pool, waiting for checked-out connections to be returned.
pub async fn close_pool(pool: &PgPool) {
    pool.close().await;
    tracing::info!("database pool closed");
}
