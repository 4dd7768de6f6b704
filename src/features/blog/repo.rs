use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use tracing::warn;

use crate::features::blog::model::BlogPost;
use crate::loader::{ContentSource, load_markdown_sources};
use crate::parser::frontmatter::extract_front_matter;
use crate::search::SearchIndex;

/// The immutable blog collection: the posts in loading order, a slug lookup,
/// and the fuzzy index over all of them.
pub struct BlogStore {
    posts: Vec<BlogPost>,
    by_slug: HashMap<String, usize>,
    index: SearchIndex,
}

impl BlogStore {
    pub fn load(content_dir: &Path) -> Result<Self> {
        let sources = load_markdown_sources(content_dir)?;
        Ok(Self::from_sources(sources))
    }

    pub fn from_sources(sources: Vec<ContentSource>) -> Self {
        let posts: Vec<BlogPost> = sources
            .iter()
            .map(|source| {
                let (block, content) = extract_front_matter(&source.raw_text);
                BlogPost::assemble(&source.slug, &block, &content)
            })
            .collect();

        for post in &posts {
            if !post.date.is_empty()
                && chrono::NaiveDate::parse_from_str(&post.date, "%Y-%m-%d").is_err()
            {
                warn!("Blog post {} has a date that won't parse: {}", post, post.date);
            }
        }

        let mut by_slug = HashMap::new();
        for (position, post) in posts.iter().enumerate() {
            // duplicate slugs are tolerated, the later record shadows the
            // earlier one in lookups while both stay in the list
            if by_slug.insert(post.slug.clone(), position).is_some() {
                warn!("Duplicate blog slug {}, later file shadows the earlier one", post.slug);
            }
        }

        let index = SearchIndex::build(&posts);

        Self {
            posts,
            by_slug,
            index,
        }
    }

    pub fn all(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn get(&self, slug: &str) -> Option<&BlogPost> {
        self.by_slug.get(slug).map(|&position| &self.posts[position])
    }

    /// The page-level search filter. An empty or whitespace-only query means
    /// "no filtering": the whole collection comes back in its original order
    /// without touching the index.
    pub fn filter(&self, query: &str) -> Vec<&BlogPost> {
        let query = query.trim();
        if query.is_empty() {
            return self.posts.iter().collect();
        }

        self.index
            .search(query)
            .into_iter()
            .map(|position| &self.posts[position])
            .collect()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
