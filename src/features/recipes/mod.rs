pub mod curated;
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
use model::{Recipe, RecipeFilter};

pub fn recipes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_recipes_handler))
        .route("/tags", get(list_tags_handler))
        .route("/{slug}", get(get_recipe_handler))
}

#[derive(Deserialize)]
struct RecipeListQuery {
    q: Option<String>,
    original: Option<bool>,
    curated: Option<bool>,
    /// Comma-separated tag selection, OR-combined.
    tags: Option<String>,
}

impl RecipeListQuery {
    fn into_filter(self) -> RecipeFilter {
        RecipeFilter {
            query: self.q.unwrap_or_default(),
            show_original: self.original.unwrap_or(true),
            show_curated: self.curated.unwrap_or(true),
            selected_tags: self
                .tags
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|tag| !tag.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

async fn list_recipes_handler(
    State(state): State<AppState>,
    Query(params): Query<RecipeListQuery>,
) -> Json<Vec<Recipe>> {
    let filter = params.into_filter();

    let recipes: Vec<Recipe> = state
        .content
        .recipes
        .filter(&filter)
        .into_iter()
        .cloned()
        .collect();

    Json(recipes)
}

async fn list_tags_handler(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.content.recipes.all_tags())
}

async fn get_recipe_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Recipe>, StatusCode> {
    match state.content.recipes.get(&slug) {
        Some(recipe) => Ok(Json(recipe.clone())),
        None => Err(StatusCode::NOT_FOUND),
    }
}
