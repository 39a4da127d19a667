//! Post repository
//!
//! Database operations for posts. Every loaded post carries its full
//! category, so queries join the categories table rather than returning a
//! bare category id.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::Row;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::DbPool;
use crate::models::{Category, Post};

const SELECT_POST: &str = r#"
    SELECT p.id, p.title, p.content, p.created_date,
           c.id AS category_id, c.name AS category_name
    FROM posts p
    INNER JOIN categories c ON c.id = p.category_id
"#;

/// Post repository trait
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post
    async fn insert(&self, post: &Post) -> Result<()>;

    /// Get post by id
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Post>>;

    /// List all posts, most recent first
    async fn list_recent(&self) -> Result<Vec<Post>>;

    /// List posts belonging to the given category
    async fn list_by_category(&self, category_id: Uuid) -> Result<Vec<Post>>;

    /// Find posts whose title or content contains the given text
    /// (case-insensitive), most recent first
    async fn search_title_or_content(&self, value: &str) -> Result<Vec<Post>>;

    /// Update a post in place (`created_date` is never touched)
    async fn update(&self, post: &Post) -> Result<()>;

    /// Delete a post
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Check if a post with this id exists
    async fn exists_by_id(&self, id: Uuid) -> Result<bool>;
}

/// SQLx-based post repository implementation
pub struct SqlxPostRepository {
    pool: DbPool,
}

impl SqlxPostRepository {
    /// Create a new SQLx post repository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a shared repository handle for service wiring
    pub fn boxed(pool: DbPool) -> Arc<dyn PostRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl PostRepository for SqlxPostRepository {
    async fn insert(&self, post: &Post) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, title, content, category_id, created_date)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.category.id)
        .bind(post.created_date)
        .execute(&self.pool)
        .await
        .context("Failed to insert post")?;

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Post>> {
        let query = format!("{} WHERE p.id = ?", SELECT_POST);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to get post by id")?;

        row.map(|row| row_to_post(&row)).transpose()
    }

    async fn list_recent(&self) -> Result<Vec<Post>> {
        let query = format!("{} ORDER BY p.created_date DESC", SELECT_POST);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .context("Failed to list posts")?;

        rows.iter().map(row_to_post).collect()
    }

    async fn list_by_category(&self, category_id: Uuid) -> Result<Vec<Post>> {
        let query = format!("{} WHERE p.category_id = ?", SELECT_POST);

        let rows = sqlx::query(&query)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await
            .context("Failed to list posts by category")?;

        rows.iter().map(row_to_post).collect()
    }

    async fn search_title_or_content(&self, value: &str) -> Result<Vec<Post>> {
        let pattern = format!("%{}%", value);
        let query = format!(
            "{} WHERE p.title LIKE ? OR p.content LIKE ? ORDER BY p.created_date DESC",
            SELECT_POST
        );

        let rows = sqlx::query(&query)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await
            .context("Failed to search posts")?;

        rows.iter().map(row_to_post).collect()
    }

    async fn update(&self, post: &Post) -> Result<()> {
        sqlx::query("UPDATE posts SET title = ?, content = ?, category_id = ? WHERE id = ?")
            .bind(&post.title)
            .bind(&post.content)
            .bind(post.category.id)
            .bind(post.id)
            .execute(&self.pool)
            .await
            .context("Failed to update post")?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete post")?;

        Ok(())
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM posts WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .context("Failed to check post existence")?;

        let count: i64 = row.get("count");
        Ok(count > 0)
    }
}

fn row_to_post(row: &sqlx::sqlite::SqliteRow) -> Result<Post> {
    Ok(Post {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        created_date: row.get("created_date"),
        category: Category {
            id: row.get("category_id"),
            name: row.get("category_name"),
        },
    })
}
