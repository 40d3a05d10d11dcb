//! Orchestration of catalog loading, search, and query execution.

pub mod cache;
pub mod engine;
pub mod errors;

pub use bookscape_postgres::conf::ConnectionConf;
