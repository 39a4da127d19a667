//! BloggerBox - a small REST backend for a blog platform

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bloggerbox::api::{build_router, AppState};
use bloggerbox::config::Config;
use bloggerbox::db::repositories::{SqlxCategoryRepository, SqlxPostRepository};
use bloggerbox::db::{create_pool, migrations};
use bloggerbox::services::{CategoryService, PostService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bloggerbox=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load_with_env(Path::new("config.yml"))?;
    tracing::info!(database = %config.database.url, "Configuration loaded");

    let pool = create_pool(&config.database).await?;
    migrations::run_migrations(&pool).await?;

    let category_repo = SqlxCategoryRepository::boxed(pool.clone());
    let post_repo = SqlxPostRepository::boxed(pool);

    let state = AppState {
        category_service: Arc::new(CategoryService::new(category_repo.clone())),
        post_service: Arc::new(PostService::new(post_repo, category_repo)),
    };

    let app = build_router(state, &config.server.cors_origin);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
