//! Post API endpoints
//!
//! - GET    /v1/posts      - list, or filter with ?value= on title/content
//! - GET    /v1/posts/{id} - get one
//! - POST   /v1/posts      - create, 201 + Location
//! - PUT    /v1/posts/{id} - update title, content, category
//! - DELETE /v1/posts/{id} - delete, 202

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
use crate::models::Post;

/// Query parameters for listing posts
#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    pub value: Option<String>,
}

/// Request body for creating or updating a post
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    pub title: String,
    pub content: String,
    pub category_id: Uuid,
}

/// Build the posts router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/{id}", get(get_post).put(update_post).delete(delete_post))
}

/// GET /v1/posts - all posts (most recent first), or filter by title/content
async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ListPostsQuery>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = match query.value.as_deref() {
        Some(value) if !value.trim().is_empty() => {
            state.post_service.get_all_like_title_or_content(value).await?
        }
        _ => state.post_service.get_all().await?,
    };

    Ok(Json(posts))
}

/// GET /v1/posts/{id} - get a post by id
async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Post>, ApiError> {
    let post = state.post_service.get_by_id(id).await?;
    Ok(Json(post))
}

/// POST /v1/posts - create a new post
async fn create_post(
    State(state): State<AppState>,
    Json(request): Json<PostRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let post = state
        .post_service
        .create(&request.title, &request.content, request.category_id)
        .await?;
    let location = format!("/v1/posts/{}", post.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(post)))
}

/// PUT /v1/posts/{id} - update an existing post
async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<PostRequest>,
) -> Result<Json<Post>, ApiError> {
    let post = state
        .post_service
        .update(id, &request.title, &request.content, request.category_id)
        .await?;
    Ok(Json(post))
}

/// DELETE /v1/posts/{id} - delete an existing post
async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state.post_service.delete_by_id(id).await?;
    Ok((StatusCode::ACCEPTED, Json(true)))
}
