use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use anyhow::Result;
use tracing::warn;

use crate::features::recipes::curated::curated_recipes;
use crate::features::recipes::model::{Recipe, RecipeFilter, RecipeKind};
use crate::loader::{ContentSource, load_markdown_sources};
use crate::parser::frontmatter::extract_front_matter;
use crate::search::SearchIndex;

/// The immutable recipe collection: file-derived records first (sorted by
/// slug), then the curated declarations, plus a slug lookup and the fuzzy
/// index over all of them.
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    by_slug: HashMap<String, usize>,
    index: SearchIndex,
}

impl RecipeStore {
    pub fn load(content_dir: &Path) -> Result<Self> {
        let sources = load_markdown_sources(content_dir)?;
        Ok(Self::from_sources(sources))
    }

    pub fn from_sources(sources: Vec<ContentSource>) -> Self {
        let mut recipes: Vec<Recipe> = sources
            .iter()
            .map(|source| {
                let (block, content) = extract_front_matter(&source.raw_text);
                Recipe::assemble(&source.slug, &block, &content)
            })
            .collect();

        recipes.extend(curated_recipes());

        for recipe in &recipes {
            if chrono::NaiveDate::parse_from_str(&recipe.date, "%Y-%m-%d").is_err() {
                warn!(
                    "Recipe {} has a date that won't parse: {}",
                    recipe, recipe.date
                );
            }
        }

        let mut by_slug = HashMap::new();
        for (position, recipe) in recipes.iter().enumerate() {
            // duplicate slugs are tolerated, the later record shadows the
            // earlier one in lookups while both stay in the list
            if by_slug.insert(recipe.slug.clone(), position).is_some() {
                warn!(
                    "Duplicate recipe slug {}, later record shadows the earlier one",
                    recipe.slug
                );
            }
        }

        let index = SearchIndex::build(&recipes);

        Self {
            recipes,
            by_slug,
            index,
        }
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, slug: &str) -> Option<&Recipe> {
        self.by_slug
            .get(slug)
            .map(|&position| &self.recipes[position])
    }

    /// The recipes page's filter, applied in its original order: fuzzy search
    /// first, then the type toggles, then the selected tags (OR logic). An
    /// empty or whitespace-only query bypasses the index entirely.
    pub fn filter(&self, filter: &RecipeFilter) -> Vec<&Recipe> {
        let query = filter.query.trim();

        let searched: Vec<&Recipe> = if query.is_empty() {
            self.recipes.iter().collect()
        } else {
            self.index
                .search(query)
                .into_iter()
                .map(|position| &self.recipes[position])
                .collect()
        };

        let type_filtered = searched.into_iter().filter(|recipe| match recipe.kind {
            RecipeKind::Original => filter.show_original,
            RecipeKind::Curated => filter.show_curated,
        });

        if filter.selected_tags.is_empty() {
            return type_filtered.collect();
        }

        type_filtered
            .filter(|recipe| {
                recipe.tags.as_ref().is_some_and(|tags| {
                    tags.iter().any(|tag| filter.selected_tags.contains(tag))
                })
            })
            .collect()
    }

    /// Sorted, deduplicated union of every recipe's tags, for the filter UI.
    pub fn all_tags(&self) -> Vec<String> {
        self.recipes
            .iter()
            .flat_map(|recipe| recipe.tags.as_deref().unwrap_or_default())
            .cloned()
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
