pub mod api_content_routers;
pub mod integration_content_loader;
