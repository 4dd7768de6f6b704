use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use crate::config::VerandaConfig;
use crate::features::blog::blog_router;
use crate::features::blog::repo::BlogStore;
use crate::features::cv::cv_router;
use crate::features::projects::projects_router;
use crate::features::recipes::recipes_router;
use crate::features::recipes::repo::RecipeStore;
use crate::loader::ContentSource;
use crate::{AppState, SiteContent};

fn source(slug: &str, raw_text: &str) -> ContentSource {
    ContentSource {
        slug: slug.to_string(),
        raw_text: raw_text.to_string(),
    }
}

// helper to prepare the API with some in-memory content
fn setup_api_test_state() -> AppState {
    let blog = BlogStore::from_sources(vec![
        source(
            "first-post",
            "---\ntitle: First Post\ndate: 2024-01-01\nsummary: Hello.\n---\nWelcome aboard.",
        ),
        source(
            "second-post",
            "---\ntitle: Second Post\ndate: 2024-02-01\nsummary: More.\n---\nStill writing.",
        ),
    ]);

    let recipes = RecipeStore::from_sources(vec![source(
        "vegan-tiramisu",
        "---\ntitle: Vegan Tiramisu\nserves: 4\ntags:\n  - vegan\n  - dessert\n---\nSoak the biscuits...",
    )]);

    let config = Arc::new(VerandaConfig {
        blog_content_dir: PathBuf::from("./content/blog"),
        recipes_content_dir: PathBuf::from("./content/recipes"),
        frontend_dist_path: PathBuf::from("./dist"),
        bind_address: "127.0.0.1".to_string(),
        port: 0,
    });

    AppState {
        content: Arc::new(SiteContent { blog, recipes }),
        config,
    }
}

async fn get_json(
    router: axum::Router<AppState>,
    state: AppState,
    uri: &str,
) -> (StatusCode, serde_json::Value) {
    let app = router.with_state(state);
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };

    (status, json)
}

// the list endpoint returns the whole collection in order when unfiltered
#[tokio::test]
async fn test_list_posts() {
    let state = setup_api_test_state();
    let (status, json) = get_json(blog_router(), state, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["slug"], "first-post");
    assert_eq!(json[1]["slug"], "second-post");
}

// test that requesting a valid slug returns the full record
#[tokio::test]
async fn test_get_post_success() {
    let state = setup_api_test_state();
    let (status, json) = get_json(blog_router(), state, "/first-post").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "First Post");
    assert_eq!(json["content"], "Welcome aboard.");
    assert!(json["htmlContent"].as_str().unwrap().contains("<p>"));
}

// ensure the API correctly returns 404 for slugs that don't resolve
#[tokio::test]
async fn test_get_post_not_found() {
    let state = setup_api_test_state();
    let (status, _) = get_json(blog_router(), state, "/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// the q parameter drives the fuzzy filter; a miss is an empty list, not an
// error
#[tokio::test]
async fn test_list_posts_filtered() {
    let state = setup_api_test_state();

    let (status, json) = get_json(blog_router(), state.clone(), "/?q=secnd").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["slug"], "second-post");

    let (status, json) = get_json(blog_router(), state, "/?q=xylophone").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 0);
}

// recipes come back file-derived first, curated concatenated at the end
#[tokio::test]
async fn test_list_recipes_order() {
    let state = setup_api_test_state();
    let (status, json) = get_json(recipes_router(), state, "/").await;

    assert_eq!(status, StatusCode::OK);
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["slug"], "vegan-tiramisu");
    assert_eq!(list[0]["type"], "original");
    assert_eq!(list[1]["slug"], "curated-steak");
    assert_eq!(list[1]["type"], "curated");
}

// the visibility toggles and tag selection thread through the query string
#[tokio::test]
async fn test_list_recipes_filters() {
    let state = setup_api_test_state();

    let (_, json) = get_json(recipes_router(), state.clone(), "/?curated=false").await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["slug"], "vegan-tiramisu");

    let (_, json) = get_json(recipes_router(), state.clone(), "/?tags=steak").await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["slug"], "curated-steak");

    let (_, json) = get_json(recipes_router(), state, "/?tags=vegan,steak").await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_recipe_and_tags() {
    let state = setup_api_test_state();

    let (status, json) = get_json(recipes_router(), state.clone(), "/vegan-tiramisu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["serves"], "4");

    let (status, _) = get_json(recipes_router(), state.clone(), "/no-such-recipe").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = get_json(recipes_router(), state, "/tags").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!(["curated", "dessert", "steak", "vegan"])
    );
}

// the statically declared collections are served as-is
#[tokio::test]
async fn test_cv_and_projects() {
    let state = setup_api_test_state();

    let (status, json) = get_json(cv_router(), state.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!json["experience"].as_array().unwrap().is_empty());
    assert!(!json["education"].as_array().unwrap().is_empty());
    assert!(!json["awards"].as_array().unwrap().is_empty());

    let (status, json) = get_json(projects_router(), state, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!json.as_array().unwrap().is_empty());
    assert!(json[0]["title"].is_string());
}
