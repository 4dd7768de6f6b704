use std::fs;

use crate::features::blog::repo::BlogStore;
use crate::loader::load_markdown_sources;

// enumeration order is not contractual, so the loader sorts by slug; only
// markdown files count, and subdirectories are walked
#[test]
fn test_loader_sorts_and_filters() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b-post.md"), "---\ntitle: B\n---\nbody b").unwrap();
    fs::write(dir.path().join("a-post.md"), "---\ntitle: A\n---\nbody a").unwrap();
    fs::write(dir.path().join("notes.txt"), "not content").unwrap();
    fs::create_dir(dir.path().join("drafts")).unwrap();
    fs::write(dir.path().join("drafts").join("c-post.md"), "body c").unwrap();

    let sources = load_markdown_sources(dir.path()).unwrap();
    let slugs: Vec<&str> = sources.iter().map(|s| s.slug.as_str()).collect();

    assert_eq!(slugs, vec!["a-post", "b-post", "c-post"]);
}

// a missing directory is an empty collection, not a crash; the server should
// still come up with nothing to show
#[test]
fn test_missing_directory_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let sources = load_markdown_sources(&missing).unwrap();
    assert!(sources.is_empty());
}

// the whole pipeline against real files: enumerate, parse, assemble, index
#[test]
fn test_store_load_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("hello.md"),
        "---\ntitle: Hello World\ndate: 2024-01-15\nsummary: The first one.\n---\nSome *markdown* here.",
    )
    .unwrap();
    fs::write(dir.path().join("plain.md"), "No front matter at all.").unwrap();

    let store = BlogStore::load(dir.path()).unwrap();
    let slugs: Vec<&str> = store.all().iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["hello", "plain"]);

    let hello = store.get("hello").unwrap();
    assert_eq!(hello.title, "Hello World");
    assert_eq!(hello.content, "Some *markdown* here.");
    assert!(hello.html_content.contains("<em>markdown</em>"));

    let plain = store.get("plain").unwrap();
    assert_eq!(plain.title, "Untitled Post");
    assert_eq!(plain.content, "No front matter at all.");
}

// duplicate slugs are kept in the list while the later one shadows the
// earlier in lookups
#[test]
fn test_duplicate_slug_shadows_in_lookup() {
    use crate::loader::ContentSource;

    let store = BlogStore::from_sources(vec![
        ContentSource {
            slug: "post".to_string(),
            raw_text: "---\ntitle: Earlier\n---\nbody".to_string(),
        },
        ContentSource {
            slug: "post".to_string(),
            raw_text: "---\ntitle: Later\n---\nbody".to_string(),
        },
    ]);

    assert_eq!(store.len(), 2);
    assert_eq!(store.get("post").unwrap().title, "Later");
}
