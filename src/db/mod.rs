//! Database layer
//!
//! SQLite-backed persistence for the blog backend. The layer exposes:
//! - a connection pool factory ([`create_pool`], [`create_test_pool`])
//! - code-embedded migrations run at startup ([`migrations`])
//! - trait-based repositories for categories and posts ([`repositories`])
//!
//! Services depend on the repository traits, not on sqlx directly, so the
//! store can be swapped in tests without touching business rules.

pub mod migrations;
pub mod pool;
pub mod repositories;

pub use pool::{create_pool, create_test_pool, DbPool};
