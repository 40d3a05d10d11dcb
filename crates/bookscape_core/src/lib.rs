//! Core data model and pure transforms for the Bookscape catalog explorer.
//!
//! Nothing in this crate performs I/O. Database access lives in
//! `bookscape_postgres`, orchestration in `bookscape_exec`.

pub mod books;
pub mod catalog;
pub mod chart;
pub mod errors;
pub mod result;
pub mod search;
