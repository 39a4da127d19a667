//! Category API endpoints
//!
//! - GET    /v1/categories            - list, or filter with ?name=
//! - GET    /v1/categories/{id}       - get one
//! - POST   /v1/categories            - create, 201 + Location
//! - PUT    /v1/categories/{id}       - rename
//! - DELETE /v1/categories/{id}       - delete, 202
//! - GET    /v1/categories/{id}/posts - posts in the category

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::{error::ApiError, AppState};
use crate::models::{Category, Post};

/// Query parameters for listing categories
#[derive(Debug, Deserialize)]
pub struct ListCategoriesQuery {
    pub name: Option<String>,
}

/// Request body for creating or renaming a category
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
}

/// Build the categories router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
        .route("/{id}/posts", get(get_category_posts))
}

/// GET /v1/categories - list all categories, or filter like name
async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<ListCategoriesQuery>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = match query.name.as_deref() {
        Some(name) if !name.trim().is_empty() => {
            state.category_service.get_all_like_name(name).await?
        }
        _ => state.category_service.get_all().await?,
    };

    Ok(Json(categories))
}

/// GET /v1/categories/{id} - get a category by id
async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Category>, ApiError> {
    let category = state.category_service.get_by_id(id).await?;
    Ok(Json(category))
}

/// POST /v1/categories - create a new category
async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let category = state.category_service.create(&request.name).await?;
    let location = format!("/v1/categories/{}", category.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(category),
    ))
}

/// PUT /v1/categories/{id} - rename an existing category
async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CategoryRequest>,
) -> Result<Json<Category>, ApiError> {
    let category = state.category_service.update(id, &request.name).await?;
    Ok(Json(category))
}

/// DELETE /v1/categories/{id} - delete an existing category
async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state.category_service.delete_by_id(id).await?;
    Ok((StatusCode::ACCEPTED, Json(true)))
}

/// GET /v1/categories/{id}/posts - posts belonging to the category
async fn get_category_posts(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state.post_service.get_all_by_category_id(id).await?;
    Ok(Json(posts))
}
