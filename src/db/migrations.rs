//! Database migrations
//!
//! Code-based migrations embedded in the binary. Each migration is a
//! versioned SQL script; applied versions are recorded in the
//! `schema_migrations` table so `run_migrations` is idempotent and safe to
//! call on every startup.
//!
//! The schema backs two service-level invariants at the storage layer:
//! - `categories.name` carries a UNIQUE constraint, so the service's
//!   check-then-insert on names cannot race into a duplicate
//! - `posts.category_id` is a foreign key with ON DELETE CASCADE, so a
//!   deleted category never leaves orphaned posts behind

use anyhow::{Context, Result};
use sqlx::Row;

use super::DbPool;

/// A single database migration.
#[derive(Debug, Clone)]
pub struct Migration {
    /// Migration version number (unique and sequential)
    pub version: i32,
    /// Human-readable migration name
    pub name: &'static str,
    /// SQL statements to apply
    pub up: &'static str,
}

/// All migrations, in order.
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_categories",
        up: r#"
            CREATE TABLE IF NOT EXISTS categories (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL UNIQUE
            );
        "#,
    },
    Migration {
        version: 2,
        name: "create_posts",
        up: r#"
            CREATE TABLE IF NOT EXISTS posts (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                category_id TEXT NOT NULL,
                created_date TIMESTAMP NOT NULL,
                FOREIGN KEY (category_id) REFERENCES categories(id) ON DELETE CASCADE
            );
            CREATE INDEX IF NOT EXISTS idx_posts_category_id ON posts(category_id);
            CREATE INDEX IF NOT EXISTS idx_posts_created_date ON posts(created_date);
        "#,
    },
];

/// Run all pending migrations against the pool.
pub async fn run_migrations(pool: &DbPool) -> Result<()> {
    create_migrations_table(pool).await?;

    let applied = applied_versions(pool).await?;

    for migration in MIGRATIONS {
        if applied.contains(&migration.version) {
            continue;
        }

        tracing::info!(
            version = migration.version,
            name = migration.name,
            "Applying migration"
        );

        // SQLite rejects multi-statement execute, so split the script
        for statement in migration.up.split(';') {
            let statement = statement.trim();
            if statement.is_empty() {
                continue;
            }
            sqlx::query(statement)
                .execute(pool)
                .await
                .with_context(|| {
                    format!("Failed to apply migration {} ({})", migration.version, migration.name)
                })?;
        }

        sqlx::query("INSERT INTO schema_migrations (version, name) VALUES (?, ?)")
            .bind(migration.version)
            .bind(migration.name)
            .execute(pool)
            .await
            .with_context(|| format!("Failed to record migration {}", migration.version))?;
    }

    Ok(())
}

async fn create_migrations_table(pool: &DbPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create schema_migrations table")?;

    Ok(())
}

async fn applied_versions(pool: &DbPool) -> Result<Vec<i32>> {
    let rows = sqlx::query("SELECT version FROM schema_migrations ORDER BY version")
        .fetch_all(pool)
        .await
        .context("Failed to read applied migrations")?;

    Ok(rows.iter().map(|row| row.get("version")).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_test_pool;

    #[tokio::test]
    async fn test_run_migrations() {
        let pool = create_test_pool().await.expect("Failed to create test pool");

        run_migrations(&pool).await.expect("Failed to run migrations");

        // Both tables should exist
        sqlx::query("SELECT COUNT(*) FROM categories")
            .fetch_one(&pool)
            .await
            .expect("categories table should exist");
        sqlx::query("SELECT COUNT(*) FROM posts")
            .fetch_one(&pool)
            .await
            .expect("posts table should exist");
    }

    #[tokio::test]
    async fn test_run_migrations_is_idempotent() {
        let pool = create_test_pool().await.expect("Failed to create test pool");

        run_migrations(&pool).await.expect("First run failed");
        run_migrations(&pool).await.expect("Second run failed");

        let versions = applied_versions(&pool).await.expect("Failed to read versions");
        assert_eq!(versions.len(), MIGRATIONS.len());
    }

    #[tokio::test]
    async fn test_category_name_unique_constraint() {
        let pool = create_test_pool().await.expect("Failed to create test pool");
        run_migrations(&pool).await.expect("Failed to run migrations");

        sqlx::query("INSERT INTO categories (id, name) VALUES (?, ?)")
            .bind(uuid::Uuid::new_v4())
            .bind("Travel")
            .execute(&pool)
            .await
            .expect("First insert should succeed");

        let result = sqlx::query("INSERT INTO categories (id, name) VALUES (?, ?)")
            .bind(uuid::Uuid::new_v4())
            .bind("Travel")
            .execute(&pool)
            .await;

        assert!(result.is_err(), "Duplicate name should violate UNIQUE");
    }
}
