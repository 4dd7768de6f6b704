use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

use crate::parser::frontmatter::FrontMatterBlock;
use crate::parser::markdown::compile_markdown_to_html;
use crate::search::{SearchField, Searchable};

/// A published blog post, assembled once at startup and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("{}", slug)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub summary: String,
    /// Markdown body, front matter stripped.
    pub content: String,
    /// Sanitized HTML compilation of `content`.
    pub html_content: String,
}

impl BlogPost {
    /// Layers schema defaults under the parsed metadata and attaches the
    /// parser's body output.
    ///
    /// A key present in the block always wins over its default, even with an
    /// empty value. `content` always comes from the body and cannot be set
    /// from front matter.
    pub fn assemble(slug: &str, block: &FrontMatterBlock, content: &str) -> BlogPost {
        BlogPost {
            slug: slug.to_string(),
            title: field_or(block, "title", "Untitled Post"),
            date: field_or(block, "date", ""),
            summary: field_or(block, "summary", ""),
            content: content.to_string(),
            html_content: compile_markdown_to_html(content),
        }
    }
}

fn field_or(block: &FrontMatterBlock, key: &str, default: &str) -> String {
    block.get(key).unwrap_or(default).to_string()
}

impl Searchable for BlogPost {
    fn search_fields(&self) -> Vec<SearchField> {
        vec![
            SearchField::new(1.0, self.title.clone()),
            SearchField::new(1.0, self.summary.clone()),
            SearchField::new(1.0, self.content.clone()),
        ]
    }
}
