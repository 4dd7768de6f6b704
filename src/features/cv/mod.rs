pub mod model;

use axum::{Json, Router, routing::get};

use crate::AppState;
use model::{CvDocument, CvEntry};

pub fn cv_router() -> Router<AppState> {
    Router::new().route("/", get(get_cv_handler))
}

async fn get_cv_handler() -> Json<CvDocument> {
    Json(cv_document())
}

// the CV has no markdown source; like the curated recipes it is declared in
// code and versioned with it
pub fn cv_document() -> CvDocument {
    CvDocument {
        experience: vec![
            CvEntry {
                start_year: 2022,
                end_year: "Present".to_string(),
                title: "Control Systems Engineer".to_string(),
                location: "Fusion energy startup".to_string(),
                description: "Designing and testing real-time control software for a \
                              first-of-its-kind machine, plus the operational procedures \
                              around it. Day to day spans Python, C++, Rust and a long \
                              tail of lab tooling."
                    .to_string(),
                render_by_default: true,
            },
            CvEntry {
                start_year: 2020,
                end_year: "2022".to_string(),
                title: "Research Assistant".to_string(),
                location: "University physics department".to_string(),
                description: "Detector position analysis and simulation work, mostly \
                              C++ and Python. See the [analysis write-up](#/projects)."
                    .to_string(),
                render_by_default: false,
            },
        ],
        education: vec![CvEntry {
            start_year: 2021,
            end_year: "2023".to_string(),
            title: "MSc. in Applied Physics".to_string(),
            location: "EPFL".to_string(),
            description: "Thesis on interpretable stability metrics for tokamak \
                          plasmas, with a semester of visiting research abroad."
                .to_string(),
            render_by_default: true,
        }],
        awards: vec![CvEntry {
            start_year: 2021,
            end_year: String::new(),
            title: "Masters Fellowship".to_string(),
            location: "EPFL".to_string(),
            description: "Faculty-wide fellowship for incoming masters students, \
                          renewed for a second year."
                .to_string(),
            render_by_default: true,
        }],
    }
}
