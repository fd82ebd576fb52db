//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One shared `PgPool`, passed explicitly - no hidden global
//! - Parameterized statements only
//! - Every round trip bounded by a fixed deadline, never retried

pub mod pool;
pub mod repos;

pub use pool::{close_pool, create_pool, create_pool_with_options, ping_pool, PoolSettings};
pub use repos::*;
