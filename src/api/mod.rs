//! API layer - HTTP handlers and routing
//!
//! Per-resource routers are nested under `/v1`; service errors surface as
//! plain-text responses through [`error::ApiError`].

pub mod categories;
pub mod error;
pub mod posts;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::{CategoryService, PostService};

pub use error::ApiError;

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService>,
    pub post_service: Arc<PostService>,
}

/// Build the versioned API router
pub fn build_api_router() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/posts", posts::router())
}

/// Build the complete router with middleware
pub fn build_router(state: AppState, cors_origin: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin.parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .nest("/v1", build_api_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
