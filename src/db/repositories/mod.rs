//! Repositories
//!
//! Trait-based data access for categories and posts. Services hold the
//! traits behind `Arc<dyn …>`; the sqlx implementations are the only code
//! that touches SQL.

pub mod category;
pub mod post;

pub use category::{CategoryRepository, SqlxCategoryRepository};
pub use post::{PostRepository, SqlxPostRepository};
