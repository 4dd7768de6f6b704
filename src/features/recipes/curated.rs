use crate::features::recipes::model::{Recipe, RecipeKind};
use crate::parser::markdown::compile_markdown_to_html;

/// Recipes that point at third-party content. These have no local markdown
/// source and no front matter; they are declared here and concatenated onto
/// the end of the file-derived list.
pub fn curated_recipes() -> Vec<Recipe> {
    let steak_note =
        "This is my go-to technique for thick-cut steaks. The *Serious Eats* method is foolproof...";

    vec![Recipe {
        slug: "curated-steak".to_string(),
        kind: RecipeKind::Curated,
        title: "Reverse Seared Ribeye".to_string(),
        date: "2023-10-01".to_string(),
        summary: "The best method for cooking a thick-cut steak, ensuring a perfect \
                  edge-to-edge medium-rare cook and a phenomenal crust."
            .to_string(),
        source_url: Some("https://www.seriouseats.com/reverse-seared-steak-recipe".to_string()),
        image_url: None,
        serves: None,
        active_cook_time: None,
        total_time: None,
        tags: Some(vec!["steak".to_string(), "curated".to_string()]),
        content: steak_note.to_string(),
        html_content: compile_markdown_to_html(steak_note),
    }]
}
