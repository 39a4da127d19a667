//! Category service
//!
//! Implements business logic for category management:
//! - Create, read, update, delete categories
//! - Name substring filtering
//! - Name uniqueness validation at creation and rename time

use anyhow::Context;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::repositories::CategoryRepository;
use crate::models::Category;

/// Error types for category service operations
#[derive(Debug, thiserror::Error)]
pub enum CategoryServiceError {
    /// A category with this name already exists
    #[error("Category {0} already exists")]
    NameAlreadyExists(String),

    /// No category with this id
    #[error("Category with id {0} not found")]
    NotFound(Uuid),

    /// Storage-layer failure
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Category service for managing blog categories
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    /// Create a new category service
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// List all categories. No ordering contract.
    pub async fn get_all(&self) -> Result<Vec<Category>, CategoryServiceError> {
        let categories = self.repo.list().await.context("Failed to list categories")?;
        Ok(categories)
    }

    /// List categories whose name contains `name` (case-insensitive).
    pub async fn get_all_like_name(
        &self,
        name: &str,
    ) -> Result<Vec<Category>, CategoryServiceError> {
        let categories = self
            .repo
            .find_like_name(name)
            .await
            .context("Failed to filter categories by name")?;
        Ok(categories)
    }

    /// Get a category by id.
    ///
    /// # Errors
    /// - `NotFound` if no category has this id
    pub async fn get_by_id(&self, id: Uuid) -> Result<Category, CategoryServiceError> {
        self.repo
            .get_by_id(id)
            .await
            .context("Failed to get category by id")?
            .ok_or(CategoryServiceError::NotFound(id))
    }

    /// Create a new category with the given name.
    ///
    /// # Errors
    /// - `NameAlreadyExists` if any category already holds this exact name;
    ///   nothing is persisted in that case
    pub async fn create(&self, name: &str) -> Result<Category, CategoryServiceError> {
        if self
            .repo
            .exists_by_name(name)
            .await
            .context("Failed to check name uniqueness")?
        {
            return Err(CategoryServiceError::NameAlreadyExists(name.to_string()));
        }

        let category = Category::new(name);
        self.repo
            .insert(&category)
            .await
            .context("Failed to create category")?;

        tracing::debug!(id = %category.id, name = %category.name, "Category created");
        Ok(category)
    }

    /// Rename an existing category.
    ///
    /// Renaming a category to its own current name skips the uniqueness
    /// check, so the operation is no-op-safe.
    ///
    /// # Errors
    /// - `NotFound` if no category has this id
    /// - `NameAlreadyExists` if another category already holds `name`
    pub async fn update(&self, id: Uuid, name: &str) -> Result<Category, CategoryServiceError> {
        let mut category = self.get_by_id(id).await?;

        if category.name != name
            && self
                .repo
                .exists_by_name(name)
                .await
                .context("Failed to check name uniqueness")?
        {
            return Err(CategoryServiceError::NameAlreadyExists(name.to_string()));
        }

        category.name = name.to_string();
        self.repo
            .update(&category)
            .await
            .context("Failed to update category")?;

        tracing::debug!(id = %category.id, name = %category.name, "Category renamed");
        Ok(category)
    }

    /// Delete a category by id. Dependent posts are removed with it.
    ///
    /// # Errors
    /// - `NotFound` if no category has this id
    pub async fn delete_by_id(&self, id: Uuid) -> Result<(), CategoryServiceError> {
        if !self
            .repo
            .exists_by_id(id)
            .await
            .context("Failed to check category existence")?
        {
            return Err(CategoryServiceError::NotFound(id));
        }

        self.repo.delete(id).await.context("Failed to delete category")?;

        tracing::debug!(id = %id, "Category deleted");
        Ok(())
    }
}
