use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use derive_more::derive::Display;

/// The page half of a route. The two detail pages carry a slug next to them
/// in [`AppRoute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AppRoutePage {
    #[display("home")]
    Home,
    #[display("projects")]
    Projects,
    #[display("blog")]
    Blog,
    #[display("recipes")]
    Recipes,
    #[display("cv")]
    Cv,
    #[display("blog-post")]
    BlogPost,
    #[display("recipe-details")]
    RecipeDetails,
}

/// A resolved route: which page to show, plus the slug for the detail pages.
///
/// Whether the slug resolves to an existing record is not checked here; the
/// detail endpoints answer that with their own not-found state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppRoute {
    pub page: AppRoutePage,
    pub slug: Option<String>,
}

impl AppRoute {
    /// Parses a URL fragment (`#/blog/my-post`, `recipes`, ...) into a route.
    ///
    /// Total: anything the grammar does not recognize is the home page.
    pub fn from_fragment(fragment: &str) -> AppRoute {
        let path = fragment.strip_prefix('#').unwrap_or(fragment);
        let path = path.strip_prefix('/').unwrap_or(path);
        Self::recognized(path).unwrap_or(AppRoute {
            page: AppRoutePage::Home,
            slug: None,
        })
    }

    /// Parses a fragment path, returning `None` where `from_fragment` would
    /// have fallen back to home.
    pub fn recognized(path: &str) -> Option<AppRoute> {
        let parts: Vec<&str> = path.split('/').collect();

        // detail routes take two segments and carry the second as the slug
        if parts[0] == "recipe-details" && parts.len() > 1 {
            return Some(AppRoute {
                page: AppRoutePage::RecipeDetails,
                slug: Some(parts[1].to_string()),
            });
        }
        if parts[0] == "blog" && parts.len() > 1 {
            return Some(AppRoute {
                page: AppRoutePage::BlogPost,
                slug: Some(parts[1].to_string()),
            });
        }

        let page = match parts[0] {
            "home" => AppRoutePage::Home,
            "projects" => AppRoutePage::Projects,
            "blog" => AppRoutePage::Blog,
            "recipes" => AppRoutePage::Recipes,
            "cv" => AppRoutePage::Cv,
            _ => return None,
        };

        Some(AppRoute { page, slug: None })
    }

    /// The hash URL the single-page frontend navigates by.
    pub fn fragment_url(&self) -> String {
        match (&self.page, &self.slug) {
            (AppRoutePage::BlogPost, Some(slug)) => format!("/#/blog/{}", slug),
            (AppRoutePage::RecipeDetails, Some(slug)) => format!("/#/recipe-details/{}", slug),
            (page, _) => format!("/#/{}", page),
        }
    }
}

/// Fallback for requests the static file service could not answer.
///
/// Shared links arrive as plain paths (`/blog/my-post`); when such a path
/// parses under the route grammar it is redirected to the equivalent hash URL
/// so the frontend picks it up. Everything else is a plain 404.
pub fn deep_link_response(path: &str) -> Response {
    let trimmed = path.trim_start_matches('/');

    match AppRoute::recognized(trimmed) {
        Some(route) => Redirect::temporary(&route.fragment_url()).into_response(),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}
