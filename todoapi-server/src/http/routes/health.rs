//! Health check endpoint
//!
//! Reports whether the store answers a `SELECT 1` within the query deadline,
//! along with the pool's current occupancy. Answers 503 when the store is
//! unreachable so load balancers can drain the instance.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Connection pool occupancy at the time of the check
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PoolStatus {
    pub size: u32,
    pub idle: usize,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub pool: PoolStatus,
    pub version: &'static str,
}

impl HealthResponse {
    fn new(database_up: bool, pool: PoolStatus) -> (StatusCode, Self) {
        let (code, status, database) = if database_up {
            (StatusCode::OK, "ok", "up")
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "down")
        };

        let body = Self {
            status,
            database,
            pool,
            version: env!("CARGO_PKG_VERSION"),
        };
        (code, body)
    }
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let database_up = match state.todos().ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "health check: database unreachable");
            false
        }
    };

    let pool = PoolStatus {
        size: state.pool.size(),
        idle: state.pool.num_idle(),
    };

    let (code, body) = HealthResponse::new(database_up, pool);
    (code, Json(body))
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
