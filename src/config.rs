use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct VerandaConfig {
    pub blog_content_dir: PathBuf,
    pub recipes_content_dir: PathBuf,
    pub frontend_dist_path: PathBuf,
    pub bind_address: String,
    pub port: u16,
}

impl VerandaConfig {
    pub fn from_env() -> Self {
        let blog_content_dir = PathBuf::from(
            std::env::var("BLOG_CONTENT_DIR").unwrap_or_else(|_| "./content/blog".to_string()),
        );

        let recipes_content_dir = PathBuf::from(
            std::env::var("RECIPES_CONTENT_DIR")
                .unwrap_or_else(|_| "./content/recipes".to_string()),
        );

        let frontend_dist_path = PathBuf::from(
            std::env::var("FRONTEND_DIST_PATH").unwrap_or_else(|_| "./dist".to_string()),
        );

        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("PORT")
            .ok()
            .and_then(|val| val.parse::<u16>().ok())
            .unwrap_or(3000);

        Self {
            blog_content_dir,
            recipes_content_dir,
            frontend_dist_path,
            bind_address,
            port,
        }
    }
}
