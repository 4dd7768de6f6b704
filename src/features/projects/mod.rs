pub mod model;

use axum::{Json, Router, routing::get};

use crate::AppState;
use model::Project;

pub fn projects_router() -> Router<AppState> {
    Router::new().route("/", get(list_projects_handler))
}

async fn list_projects_handler() -> Json<Vec<Project>> {
    Json(projects())
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "This website.".to_string(),
            description: "The site you are reading right now: markdown content, a \
                          hash-routed frontend, and this little server behind it."
                .to_string(),
            href: "#/projects".to_string(),
            image_url: None,
        },
        Project {
            title: "Disruption Statistics".to_string(),
            description: "Masters thesis code for interpretable plasma stability \
                          metrics across two tokamak datasets."
                .to_string(),
            href: "https://github.com/example/disruption-statistics".to_string(),
            image_url: Some("/images/projects/disruptivity.jpg".to_string()),
        },
        Project {
            title: "String Simulations".to_string(),
            description: "Cosmic string signature simulations from an undergraduate \
                          research project."
                .to_string(),
            href: "https://gitlab.com/example/string-simulations".to_string(),
            image_url: Some("/images/projects/cmbsim.jpg".to_string()),
        },
    ]
}
