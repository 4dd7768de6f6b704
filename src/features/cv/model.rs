use serde::{Deserialize, Serialize};

/// One dated CV line. `end_year` is free-form on purpose: a year, "Present",
/// or empty for one-off entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvEntry {
    pub start_year: i32,
    pub end_year: String,
    pub title: String,
    pub location: String,
    /// Markdown-bearing description, rendered by the frontend.
    pub description: String,
    /// Whether the entry is expanded before the reader asks for more.
    pub render_by_default: bool,
}

/// The whole CV, one section per list the page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvDocument {
    pub experience: Vec<CvEntry>,
    pub education: Vec<CvEntry>,
    pub awards: Vec<CvEntry>,
}
