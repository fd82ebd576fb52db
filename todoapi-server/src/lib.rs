//! todoapi-server: HTTP server for a Postgres-backed todo list
//!
//! Three thin layers: axum handlers in [`http`], the [`db`] repository
//! issuing parameterized SQL with a per-call deadline, and a shared
//! `sqlx` connection pool passed explicitly through application state.

pub mod db;
pub mod http;
pub mod models;

pub use db::{
    close_pool, create_pool, create_pool_with_options, DbError, PoolSettings, Todo, TodoRepo,
};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{TodoTitle, ValidationError};
