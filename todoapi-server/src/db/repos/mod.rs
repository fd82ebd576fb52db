//! Repository implementations for database access

pub mod todos;

pub use todos::{DbError, Todo, TodoRepo, DEFAULT_QUERY_TIMEOUT};
