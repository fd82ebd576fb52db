//! Todo repository
//!
//! Each call:
//! - runs one parameterized statement on a pooled connection
//! - is bounded by a fixed deadline (default 5s) independent of the caller
//! - maps rows straight into [`Todo`] via `FromRow`

use std::future::Future;
use std::time::Duration;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::models::TodoTitle;

/// Deadline applied to every repository round trip.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Todo record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub completed: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("database operation timed out after {after:?}")]
    Timeout { after: Duration },
}

/// Todo repository
pub struct TodoRepo<'a> {
    pool: &'a PgPool,
    timeout: Duration,
}

impl<'a> TodoRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            pool,
            timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Override the per-call deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Insert a todo and return the stored row, including the
    /// store-assigned id and timestamps.
    pub async fn create(&self, title: &TodoTitle, completed: bool) -> Result<Todo, DbError> {
        let query = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (title, completed)
            VALUES ($1, $2)
            RETURNING id, title, completed, created_at, updated_at
            "#,
        )
        .bind(title.as_str())
        .bind(completed)
        .fetch_one(self.pool);

        let todo = with_deadline(self.timeout, "create todo", query).await?;
        tracing::debug!(id = todo.id, "created todo");
        Ok(todo)
    }

    /// List every todo, newest first.
    ///
    /// Rows sharing a `created_at` fall back to descending id so the order is
    /// stable. An empty table yields an empty vec. Any failure discards rows
    /// already read.
    pub async fn list(&self) -> Result<Vec<Todo>, DbError> {
        let query = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, completed, created_at, updated_at
            FROM todos
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool);

        with_deadline(self.timeout, "list todos", query).await
    }

    /// Round-trip `SELECT 1` under the same deadline as every other call.
    pub async fn ping(&self) -> Result<(), DbError> {
        let query = sqlx::query("SELECT 1").execute(self.pool);

        with_deadline(self.timeout, "ping database", query).await?;
        Ok(())
    }

    /// Get a single todo by primary key.
    pub async fn get(&self, id: i32) -> Result<Todo, DbError> {
        let query = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, completed, created_at, updated_at
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool);

        with_deadline(self.timeout, "get todo", query)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "todo",
                id: id.to_string(),
            })
    }
}

/// Run a database future under `timeout`.
///
/// On expiry the future is dropped, which cancels the in-flight statement
/// and releases its connection. Nothing is retried.
async fn with_deadline<T, F>(timeout: Duration, op: &'static str, fut: F) -> Result<T, DbError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "unable to {}", op);
            Err(DbError::Sqlx(e))
        }
        Err(_) => {
            tracing::warn!(timeout_ms = timeout.as_millis() as u64, "{} timed out", op);
            Err(DbError::Timeout { after: timeout })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn deadline_aborts_slow_operation() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<_, sqlx::Error>(1)
        };

        let result = with_deadline(DEFAULT_QUERY_TIMEOUT, "slow op", slow).await;
        assert!(matches!(result, Err(DbError::Timeout { after }) if after == DEFAULT_QUERY_TIMEOUT));
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_never_resolving_operation() {
        let hung = std::future::pending::<Result<(), sqlx::Error>>();

        let started = tokio::time::Instant::now();
        let result = with_deadline(Duration::from_secs(2), "hung op", hung).await;

        assert!(matches!(result, Err(DbError::Timeout { after }) if after == Duration::from_secs(2)));
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn sub_second_deadline_keeps_precision() {
        let hung = std::future::pending::<Result<(), sqlx::Error>>();

        let err = with_deadline(Duration::from_millis(200), "hung op", hung)
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::Timeout { after } if after == Duration::from_millis(200)));
        assert_eq!(err.to_string(), "database operation timed out after 200ms");
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_passes_through_fast_result() {
        let fast = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok::<_, sqlx::Error>("done")
        };

        let result = with_deadline(DEFAULT_QUERY_TIMEOUT, "fast op", fast).await;
        assert_eq!(result.unwrap(), "done");
    }

    #[tokio::test]
    async fn deadline_propagates_store_error() {
        let failing = async { Err::<(), _>(sqlx::Error::RowNotFound) };

        let result = with_deadline(DEFAULT_QUERY_TIMEOUT, "failing op", failing).await;
        assert!(matches!(result, Err(DbError::Sqlx(sqlx::Error::RowNotFound))));
    }

    #[test]
    fn todo_serializes_all_fields() {
        let ts = chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let todo = Todo {
            id: 7,
            title: "Buy milk".into(),
            completed: false,
            created_at: ts,
            updated_at: ts,
        };

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["completed"], false);
        assert_eq!(json["created_at"], "2024-05-01T12:30:00");
    }
}
