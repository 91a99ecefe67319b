//! Post endpoints
//!
//! RPC-style paths, any HTTP method, parameters in the query string.

use std::sync::Arc;

use axum::{extract::State, routing::any, Json, Router};
use postboard_core::Post;

use crate::http::error::ApiError;
use crate::http::extractors::{ContentParam, EditParams, PostIdParam};
use crate::http::server::AppState;

/// /posts.get - list live posts, newest first
async fn list_posts(State(state): State<Arc<AppState>>) -> Json<Vec<Post>> {
    Json(state.registry.read().await.list())
}

/// /posts.getById?id=
async fn get_post(
    State(state): State<Arc<AppState>>,
    PostIdParam(requested): PostIdParam,
) -> Result<Json<Post>, ApiError> {
    let id = requested.post_id()?;
    let post = state.registry.read().await.get_by_id(id)?;
    Ok(Json(post))
}

/// /posts.post?content=
async fn create_post(
    State(state): State<Arc<AppState>>,
    ContentParam(content): ContentParam,
) -> Json<Post> {
    Json(state.registry.write().await.create(content))
}

/// /posts.edit?id=&content=
async fn edit_post(
    State(state): State<Arc<AppState>>,
    EditParams { id, content }: EditParams,
) -> Result<Json<Post>, ApiError> {
    let id = id.post_id()?;
    let post = state.registry.write().await.edit(id, content)?;
    Ok(Json(post))
}

/// /posts.delete?id= - soft delete
async fn delete_post(
    State(state): State<Arc<AppState>>,
    PostIdParam(requested): PostIdParam,
) -> Result<Json<Post>, ApiError> {
    let id = requested.post_id()?;
    let post = state.registry.write().await.soft_delete(id)?;
    Ok(Json(post))
}

/// /posts.restore?id=
async fn restore_post(
    State(state): State<Arc<AppState>>,
    PostIdParam(requested): PostIdParam,
) -> Result<Json<Post>, ApiError> {
    let id = requested.post_id()?;
    let post = state.registry.write().await.restore(id)?;
    Ok(Json(post))
}

/// Post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/posts.get", any(list_posts))
        .route("/posts.getById", any(get_post))
        .route("/posts.post", any(create_post))
        .route("/posts.edit", any(edit_post))
        .route("/posts.delete", any(delete_post))
        .route("/posts.restore", any(restore_post))
}
