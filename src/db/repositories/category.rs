//! Category repository
//!
//! Database operations for categories.
//!
//! This module provides:
//! - `CategoryRepository` trait defining the interface for category data access
//! - `SqlxCategoryRepository` implementing the trait over SQLite

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::Row;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::DbPool;
use crate::models::Category;

/// Category repository trait
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert a new category
    async fn insert(&self, category: &Category) -> Result<()>;

    /// Get category by id
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Category>>;

    /// List all categories
    async fn list(&self) -> Result<Vec<Category>>;

    /// Find categories whose name contains the given text (case-insensitive)
    async fn find_like_name(&self, name: &str) -> Result<Vec<Category>>;

    /// Update a category in place
    async fn update(&self, category: &Category) -> Result<()>;

    /// Delete a category (dependent posts cascade)
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Check if a category with this exact name exists
    async fn exists_by_name(&self, name: &str) -> Result<bool>;

    /// Check if a category with this id exists
    async fn exists_by_id(&self, id: Uuid) -> Result<bool>;
}

/// SQLx-based category repository implementation
pub struct SqlxCategoryRepository {
    pool: DbPool,
}

impl SqlxCategoryRepository {
    /// Create a new SQLx category repository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a shared repository handle for service wiring
    pub fn boxed(pool: DbPool) -> Arc<dyn CategoryRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl CategoryRepository for SqlxCategoryRepository {
    async fn insert(&self, category: &Category) -> Result<()> {
        sqlx::query("INSERT INTO categories (id, name) VALUES (?, ?)")
            .bind(category.id)
            .bind(&category.name)
            .execute(&self.pool)
            .await
            .context("Failed to insert category")?;

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        let row = sqlx::query("SELECT id, name FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to get category by id")?;

        row.map(|row| row_to_category(&row)).transpose()
    }

    async fn list(&self) -> Result<Vec<Category>> {
        let rows = sqlx::query("SELECT id, name FROM categories")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list categories")?;

        rows.iter().map(row_to_category).collect()
    }

    async fn find_like_name(&self, name: &str) -> Result<Vec<Category>> {
        let pattern = format!("%{}%", name);

        let rows = sqlx::query("SELECT id, name FROM categories WHERE name LIKE ?")
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await
            .context("Failed to find categories by name")?;

        rows.iter().map(row_to_category).collect()
    }

    async fn update(&self, category: &Category) -> Result<()> {
        sqlx::query("UPDATE categories SET name = ? WHERE id = ?")
            .bind(&category.name)
            .bind(category.id)
            .execute(&self.pool)
            .await
            .context("Failed to update category")?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete category")?;

        Ok(())
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM categories WHERE name = ?")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .context("Failed to check category name existence")?;

        let count: i64 = row.get("count");
        Ok(count > 0)
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM categories WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .context("Failed to check category existence")?;

        let count: i64 = row.get("count");
        Ok(count > 0)
    }
}

fn row_to_category(row: &sqlx::sqlite::SqliteRow) -> Result<Category> {
    Ok(Category {
        id: row.get("id"),
        name: row.get("name"),
    })
}
