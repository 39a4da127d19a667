//! Post model
//!
//! A post is a blog article belonging to exactly one category. The category
//! reference must resolve to a live category whenever the post is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Category;

/// Post entity.
///
/// `created_date` is assigned when the post is constructed and never modified
/// afterwards; updates replace title, content, and category in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique identifier, generated on creation
    pub id: Uuid,
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
    /// Owning category
    pub category: Category,
    /// Creation timestamp, immutable once set
    pub created_date: DateTime<Utc>,
}

impl Post {
    /// Create a new Post with a freshly generated id and the current time.
    pub fn new(title: impl Into<String>, content: impl Into<String>, category: Category) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            category,
            created_date: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_new() {
        let category = Category::new("Travel");
        let post = Post::new("Trip report", "We went places.", category.clone());

        assert!(!post.id.is_nil());
        assert_eq!(post.title, "Trip report");
        assert_eq!(post.content, "We went places.");
        assert_eq!(post.category, category);
    }

    #[test]
    fn test_post_serializes_camel_case() {
        let post = Post::new("T", "C", Category::new("Tech"));
        let json = serde_json::to_value(&post).expect("Failed to serialize");

        assert!(json.get("createdDate").is_some());
        assert_eq!(json["category"]["id"], post.category.id.to_string());
    }
}
