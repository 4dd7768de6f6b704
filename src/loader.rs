use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::warn;
use walkdir::WalkDir;

/// One raw content resource: the slug derived from its filename plus the
/// file's text, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSource {
    pub slug: String,
    pub raw_text: String,
}

/// Enumerates the markdown files under `root` and reads each one.
///
/// The slug is the filename with its extension stripped. Directory
/// enumeration order is not reproducible across platforms, so the result is
/// sorted by slug; unreadable files are skipped with a warning, never an
/// error. A missing or empty directory simply yields an empty collection.
pub fn load_markdown_sources(root: &Path) -> Result<Vec<ContentSource>> {
    let mut sources = Vec::new();

    for result_entry in WalkDir::new(root) {
        let entry = match result_entry {
            Ok(val) => val,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        // work with only markdown files (for now)
        if entry.path().extension().and_then(|s| s.to_str()) != Some("md") {
            continue;
        }

        let slug = entry
            .path()
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown-slug".to_string());

        let raw_text = match fs::read_to_string(entry.path()) {
            Ok(content) => content,
            Err(e) => {
                warn!("Unable to read file {}: {}", entry.path().display(), e);
                continue;
            }
        };

        sources.push(ContentSource { slug, raw_text });
    }

    sources.sort_by(|a, b| a.slug.cmp(&b.slug));

    Ok(sources)
}
