//! Command implementations for the todoapi CLI

pub mod serve;

pub use serve::run_serve;
