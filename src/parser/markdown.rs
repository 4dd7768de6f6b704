use pulldown_cmark::{Event, Options as CmarkOptions, Parser, html};

// compiles a markdown body into sanitized HTML
//
// content authors are trusted, linked/pasted material is not: raw HTML events
// are dropped before rendering so script content can never reach the page.
// Sanitization happens after markdown expansion, on the event stream itself.
pub fn compile_markdown_to_html(markdown_content: &str) -> String {
    let mut options = CmarkOptions::empty();
    options.insert(CmarkOptions::ENABLE_STRIKETHROUGH);
    options.insert(CmarkOptions::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown_content, options);

    let sanitized = parser.filter(|event| !matches!(event, Event::Html(_) | Event::InlineHtml(_)));

    let mut html_content = String::new();
    html::push_html(&mut html_content, sanitized);

    html_content
}
