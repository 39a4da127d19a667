//! Services
//!
//! Business rules on top of the repositories: category name uniqueness,
//! post→category referential checks, and the fails-with-NotFound contract
//! the HTTP layer translates into status codes.

pub mod category;
pub mod post;

pub use category::{CategoryService, CategoryServiceError};
pub use post::{PostService, PostServiceError};
