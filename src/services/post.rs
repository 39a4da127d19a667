//! Post service
//!
//! Implements business logic for post management:
//! - Create, read, update, delete posts
//! - Title/content substring search, most recent first
//! - Category existence checks before any cross-entity reference

use anyhow::Context;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::repositories::{CategoryRepository, PostRepository};
use crate::models::Post;

/// Error types for post service operations
#[derive(Debug, thiserror::Error)]
pub enum PostServiceError {
    /// No post with this id
    #[error("Post with id {0} not found")]
    NotFound(Uuid),

    /// The referenced category does not exist
    #[error("Category with id {0} not found")]
    CategoryNotFound(Uuid),

    /// Storage-layer failure
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Post service for managing blog posts
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl PostService {
    /// Create a new post service
    pub fn new(posts: Arc<dyn PostRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self { posts, categories }
    }

    /// List all posts ordered by creation time, most recent first.
    pub async fn get_all(&self) -> Result<Vec<Post>, PostServiceError> {
        let posts = self.posts.list_recent().await.context("Failed to list posts")?;
        Ok(posts)
    }

    /// List the posts belonging to the given category. No ordering contract.
    ///
    /// # Errors
    /// - `CategoryNotFound` if no category has this id
    pub async fn get_all_by_category_id(
        &self,
        category_id: Uuid,
    ) -> Result<Vec<Post>, PostServiceError> {
        if !self
            .categories
            .exists_by_id(category_id)
            .await
            .context("Failed to check category existence")?
        {
            return Err(PostServiceError::CategoryNotFound(category_id));
        }

        let posts = self
            .posts
            .list_by_category(category_id)
            .await
            .context("Failed to list posts by category")?;
        Ok(posts)
    }

    /// List posts whose title or content contains `value` (case-insensitive),
    /// most recent first.
    pub async fn get_all_like_title_or_content(
        &self,
        value: &str,
    ) -> Result<Vec<Post>, PostServiceError> {
        let posts = self
            .posts
            .search_title_or_content(value)
            .await
            .context("Failed to search posts")?;
        Ok(posts)
    }

    /// Get a post by id.
    ///
    /// # Errors
    /// - `NotFound` if no post has this id
    pub async fn get_by_id(&self, id: Uuid) -> Result<Post, PostServiceError> {
        self.posts
            .get_by_id(id)
            .await
            .context("Failed to get post by id")?
            .ok_or(PostServiceError::NotFound(id))
    }

    /// Create a new post in the given category.
    ///
    /// # Errors
    /// - `CategoryNotFound` if `category_id` does not resolve to an existing
    ///   category; nothing is persisted in that case
    pub async fn create(
        &self,
        title: &str,
        content: &str,
        category_id: Uuid,
    ) -> Result<Post, PostServiceError> {
        let category = self
            .categories
            .get_by_id(category_id)
            .await
            .context("Failed to resolve category")?
            .ok_or(PostServiceError::CategoryNotFound(category_id))?;

        let post = Post::new(title, content, category);
        self.posts.insert(&post).await.context("Failed to create post")?;

        tracing::debug!(id = %post.id, category = %category_id, "Post created");
        Ok(post)
    }

    /// Replace a post's title, content, and category. The creation timestamp
    /// is left untouched.
    ///
    /// # Errors
    /// - `NotFound` if no post has this id
    /// - `CategoryNotFound` if `category_id` does not resolve
    pub async fn update(
        &self,
        id: Uuid,
        title: &str,
        content: &str,
        category_id: Uuid,
    ) -> Result<Post, PostServiceError> {
        let mut post = self.get_by_id(id).await?;

        let category = self
            .categories
            .get_by_id(category_id)
            .await
            .context("Failed to resolve category")?
            .ok_or(PostServiceError::CategoryNotFound(category_id))?;

        post.title = title.to_string();
        post.content = content.to_string();
        post.category = category;
        self.posts.update(&post).await.context("Failed to update post")?;

        tracing::debug!(id = %post.id, "Post updated");
        Ok(post)
    }

    /// Delete a post by id.
    ///
    /// # Errors
    /// - `NotFound` if no post has this id
    pub async fn delete_by_id(&self, id: Uuid) -> Result<(), PostServiceError> {
        if !self
            .posts
            .exists_by_id(id)
            .await
            .context("Failed to check post existence")?
        {
            return Err(PostServiceError::NotFound(id));
        }

        self.posts.delete(id).await.context("Failed to delete post")?;

        tracing::debug!(id = %id, "Post deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::{SqlxCategoryRepository, SqlxPostRepository};
    use crate::db::{create_test_pool, migrations};
    use crate::models::Category;
    use crate::services::CategoryService;

    async fn setup() -> (CategoryService, PostService, Category) {
        let pool = create_test_pool().await.expect("Failed to create test pool");
        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let category_repo = SqlxCategoryRepository::boxed(pool.clone());
        let categories = CategoryService::new(category_repo.clone());
        let posts = PostService::new(SqlxPostRepository::boxed(pool), category_repo);

        let travel = categories.create("Travel").await.expect("Failed to create category");
        (categories, posts, travel)
    }

    #[tokio::test]
    async fn test_create_post_success() {
        let (_categories, posts, travel) = setup().await;

        let post = posts
            .create("Trip report", "We went places.", travel.id)
            .await
            .expect("Failed to create post");

        assert!(!post.id.is_nil());
        assert_eq!(post.title, "Trip report");
        assert_eq!(post.category, travel);
    }

    #[tokio::test]
    async fn test_create_post_unknown_category_fails_and_persists_nothing() {
        let (_categories, posts, _travel) = setup().await;
        let ghost = Uuid::new_v4();

        let result = posts.create("Orphan", "c", ghost).await;

        assert!(matches!(
            result,
            Err(PostServiceError::CategoryNotFound(got)) if got == ghost
        ));

        let all = posts.get_all().await.expect("Failed to list");
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_orders_most_recent_first() {
        let (_categories, posts, travel) = setup().await;

        // Insertion order is not creation-time order from the caller's view,
        // but each create stamps a later time than the previous one
        posts.create("First", "c", travel.id).await.expect("Failed to create");
        posts.create("Second", "c", travel.id).await.expect("Failed to create");
        posts.create("Third", "c", travel.id).await.expect("Failed to create");

        let all = posts.get_all().await.expect("Failed to list");

        let titles: Vec<_> = all.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);
    }

    #[tokio::test]
    async fn test_get_all_by_category_id_returns_exact_matches() {
        let (categories, posts, travel) = setup().await;
        let food = categories.create("Food").await.expect("Failed to create category");

        let trip = posts.create("Trip", "c", travel.id).await.expect("Failed to create");
        posts.create("Recipe", "c", food.id).await.expect("Failed to create");

        let travel_posts = posts
            .get_all_by_category_id(travel.id)
            .await
            .expect("Failed to list by category");

        assert_eq!(travel_posts.len(), 1);
        assert_eq!(travel_posts[0].id, trip.id);
    }

    #[tokio::test]
    async fn test_get_all_by_category_id_unknown_category() {
        let (_categories, posts, _travel) = setup().await;
        let ghost = Uuid::new_v4();

        let result = posts.get_all_by_category_id(ghost).await;

        assert!(matches!(
            result,
            Err(PostServiceError::CategoryNotFound(got)) if got == ghost
        ));
    }

    #[tokio::test]
    async fn test_search_title_or_content() {
        let (_categories, posts, travel) = setup().await;

        posts
            .create("Mountain hike", "nothing here", travel.id)
            .await
            .expect("Failed to create");
        posts
            .create("Day two", "another MOUNTAIN day", travel.id)
            .await
            .expect("Failed to create");
        posts.create("Beach", "sand", travel.id).await.expect("Failed to create");

        let found = posts
            .get_all_like_title_or_content("mountain")
            .await
            .expect("Failed to search");

        let titles: Vec<_> = found.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Day two", "Mountain hike"]);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let (_categories, posts, _travel) = setup().await;
        let id = Uuid::new_v4();

        let result = posts.get_by_id(id).await;

        assert!(matches!(result, Err(PostServiceError::NotFound(got)) if got == id));
    }

    #[tokio::test]
    async fn test_not_found_error_message() {
        let (_categories, posts, _travel) = setup().await;
        let id = Uuid::new_v4();

        let err = posts.get_by_id(id).await.unwrap_err();

        assert_eq!(err.to_string(), format!("Post with id {} not found", id));
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_category() {
        let (categories, posts, travel) = setup().await;
        let food = categories.create("Food").await.expect("Failed to create category");
        let created = posts
            .create("Old title", "Old content", travel.id)
            .await
            .expect("Failed to create");

        let updated = posts
            .update(created.id, "New title", "New content", food.id)
            .await
            .expect("Failed to update");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "New title");
        assert_eq!(updated.content, "New content");
        assert_eq!(updated.category, food);

        let found = posts.get_by_id(created.id).await.expect("Failed to get");
        assert_eq!(
            found.created_date.timestamp_micros(),
            created.created_date.timestamp_micros()
        );
    }

    #[tokio::test]
    async fn test_update_unknown_post() {
        let (_categories, posts, travel) = setup().await;

        let result = posts.update(Uuid::new_v4(), "T", "C", travel.id).await;

        assert!(matches!(result, Err(PostServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_unknown_category() {
        let (_categories, posts, travel) = setup().await;
        let created = posts.create("T", "C", travel.id).await.expect("Failed to create");
        let ghost = Uuid::new_v4();

        let result = posts.update(created.id, "T2", "C2", ghost).await;

        assert!(matches!(
            result,
            Err(PostServiceError::CategoryNotFound(got)) if got == ghost
        ));
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let (_categories, posts, travel) = setup().await;
        let created = posts.create("Doomed", "c", travel.id).await.expect("Failed to create");

        posts.delete_by_id(created.id).await.expect("Failed to delete");

        let result = posts.get_by_id(created.id).await;
        assert!(matches!(result, Err(PostServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let (_categories, posts, _travel) = setup().await;

        let result = posts.delete_by_id(Uuid::new_v4()).await;

        assert!(matches!(result, Err(PostServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_category_deletion_removes_its_posts() {
        let (categories, posts, travel) = setup().await;
        posts.create("Trip", "c", travel.id).await.expect("Failed to create");

        categories.delete_by_id(travel.id).await.expect("Failed to delete category");

        let result = posts.get_all_by_category_id(travel.id).await;
        assert!(matches!(result, Err(PostServiceError::CategoryNotFound(_))));

        let all = posts.get_all().await.expect("Failed to list");
        assert!(all.is_empty());
    }
}
