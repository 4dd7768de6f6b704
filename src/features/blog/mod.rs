pub mod model;
pub mod repo;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;

use crate::AppState;
use model::BlogPost;

pub fn blog_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts_handler))
        .route("/{slug}", get(get_post_handler))
}

#[derive(Deserialize)]
struct BlogListQuery {
    q: Option<String>,
}

async fn list_posts_handler(
    State(state): State<AppState>,
    Query(params): Query<BlogListQuery>,
) -> Json<Vec<BlogPost>> {
    let query = params.q.unwrap_or_default();

    let posts: Vec<BlogPost> = state
        .content
        .blog
        .filter(&query)
        .into_iter()
        .cloned()
        .collect();

    Json(posts)
}

async fn get_post_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, StatusCode> {
    match state.content.blog.get(&slug) {
        Some(post) => Ok(Json(post.clone())),
        None => Err(StatusCode::NOT_FOUND),
    }
}
