//! Domain models
//!
//! Entity types shared by the repository, service, and API layers.

pub mod category;
pub mod post;

pub use category::Category;
pub use post::Post;
