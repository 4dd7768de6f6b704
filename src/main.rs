use crate::config::VerandaConfig;
use crate::features::blog::repo::BlogStore;
use crate::features::recipes::repo::RecipeStore;
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::routing::get_service;
use dotenv;
use std::convert::Infallible;
use std::sync::Arc;
use tower::service_fn;
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod config;
mod features;
mod loader;
mod parser;
mod routes;
mod search;

#[cfg(test)]
mod tests;

/// The whole site's content, loaded once before the listener binds and
/// immutable for the life of the process.
pub struct SiteContent {
    pub blog: BlogStore,
    pub recipes: RecipeStore,
}

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<SiteContent>,
    pub config: Arc<VerandaConfig>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // load centralized config
    let config = VerandaConfig::from_env();
    let shared_config = Arc::new(config.clone());

    // build the content collections, eagerly and exactly once
    let blog = BlogStore::load(&config.blog_content_dir)?;
    let recipes = RecipeStore::load(&config.recipes_content_dir)?;
    info!(
        "Content loaded: {} blog posts, {} recipes.",
        blog.len(),
        recipes.len()
    );

    let app_state = AppState {
        content: Arc::new(SiteContent { blog, recipes }),
        config: shared_config.clone(),
    };

    // api router, where features are composed
    let api_router = Router::new()
        .nest("/blog", features::blog::blog_router())
        .nest("/recipes", features::recipes::recipes_router())
        .nest("/cv", features::cv::cv_router())
        .nest("/projects", features::projects::projects_router());

    // the SPA bundle, with deep links redirected onto the hash router
    let static_root = ServeDir::new(&config.frontend_dist_path).fallback(service_fn(
        |req: Request<Body>| async move {
            Ok::<_, Infallible>(routes::deep_link_response(req.uri().path()))
        },
    ));

    let app = Router::new()
        .nest("/api", api_router)
        .fallback_service(get_service(static_root))
        .with_state(app_state);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.bind_address, config.port)).await?;
    info!(
        "Server listening on http://{}:{}",
        config.bind_address, config.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}
