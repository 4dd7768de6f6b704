use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

use crate::parser::frontmatter::FrontMatterBlock;
use crate::parser::markdown::compile_markdown_to_html;
use crate::search::{SearchField, Searchable};

/// Whether a recipe is authored here (with a local markdown body) or a
/// curated pointer to someone else's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeKind {
    Original,
    Curated,
}

/// A recipe record, assembled once at startup and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("{}", slug)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: RecipeKind,
    pub title: String,
    pub date: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serves: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_cook_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    /// Declaration order from the source file, not deduplicated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Markdown body, front matter stripped.
    pub content: String,
    /// Sanitized HTML compilation of `content`.
    pub html_content: String,
}

impl Recipe {
    /// Layers schema defaults under the parsed metadata and attaches the
    /// parser's body output. Front matter cannot set the kind; file-derived
    /// recipes are always original, curated ones are declared in code.
    pub fn assemble(slug: &str, block: &FrontMatterBlock, content: &str) -> Recipe {
        Recipe {
            slug: slug.to_string(),
            kind: RecipeKind::Original,
            title: field_or(block, "title", "Untitled Recipe"),
            date: field_or(block, "date", "2025-01-01"),
            summary: field_or(block, "summary", "No summary provided."),
            source_url: optional_field(block, "sourceurl"),
            image_url: optional_field(block, "imageurl"),
            serves: optional_field(block, "serves"),
            active_cook_time: optional_field(block, "active cook time"),
            total_time: optional_field(block, "total time"),
            tags: block.tags().map(<[String]>::to_vec),
            content: content.to_string(),
            html_content: compile_markdown_to_html(content),
        }
    }
}

fn field_or(block: &FrontMatterBlock, key: &str, default: &str) -> String {
    block.get(key).unwrap_or(default).to_string()
}

fn optional_field(block: &FrontMatterBlock, key: &str) -> Option<String> {
    block.get(key).map(str::to_string)
}

impl Searchable for Recipe {
    fn search_fields(&self) -> Vec<SearchField> {
        vec![
            SearchField::new(1.0, self.title.clone()),
            SearchField::new(1.0, self.summary.clone()),
            SearchField::new(1.0, self.tags.as_deref().unwrap_or_default().join(" ")),
            SearchField::new(1.0, self.content.clone()),
        ]
    }
}

/// The recipes page's filter state: fuzzy query, the original/curated
/// visibility toggles, and the selected tags (OR-combined).
#[derive(Debug, Clone)]
pub struct RecipeFilter {
    pub query: String,
    pub show_original: bool,
    pub show_curated: bool,
    pub selected_tags: Vec<String>,
}

impl Default for RecipeFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            show_original: true,
            show_curated: true,
            selected_tags: Vec::new(),
        }
    }
}
