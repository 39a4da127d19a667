//! Category model
//!
//! A category is a named grouping for posts. Names are unique across all
//! categories; the service layer enforces this at creation and rename time
//! and the storage layer backs it with a UNIQUE constraint.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique identifier, generated on creation and immutable thereafter
    pub id: Uuid,
    /// Category name, unique across all categories
    pub name: String,
}

impl Category {
    /// Create a new Category with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
