use std::collections::HashMap;

/// The decoded metadata block of a content file.
///
/// Keys are lower-cased and trimmed, values are trimmed with every `'` and `"`
/// removed. Tag list items keep their quotes; only their surrounding
/// whitespace is trimmed. This is a transient value: it only lives between
/// parsing and record assembly.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrontMatterBlock {
    fields: HashMap<String, String>,
    tags: Option<Vec<String>>,
}

impl FrontMatterBlock {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.tags.is_none()
    }
}

// scanner modes: we are either matching `key: value` lines, or collecting
// `- item` lines under a `tags:` header
enum ScanMode {
    KeyValues,
    ListBlock,
}

/// Splits a raw content file into its metadata block and its body.
///
/// The block must be anchored at the very start of the text: the first line is
/// exactly `---`, the block runs until the next line that is exactly `---`.
/// Anything else (no opening delimiter, an unterminated block) is not an
/// error; the whole text passes through unchanged as the body with an empty
/// block. The body of a well-formed file is the remainder after the closing
/// delimiter, trimmed.
pub fn extract_front_matter(raw_text: &str) -> (FrontMatterBlock, String) {
    let lines: Vec<&str> = raw_text.split('\n').collect();

    if lines.first() != Some(&"---") {
        return (FrontMatterBlock::default(), raw_text.to_string());
    }

    let closing = lines.iter().skip(1).position(|line| *line == "---");
    let closing = match closing {
        Some(offset) => offset + 1,
        // unterminated block, treat as "no front matter found"
        None => return (FrontMatterBlock::default(), raw_text.to_string()),
    };

    let mut fields: HashMap<String, String> = HashMap::new();
    let mut tags: Vec<String> = Vec::new();
    let mut mode = ScanMode::KeyValues;

    for line in &lines[1..closing] {
        if let ScanMode::ListBlock = mode {
            let item = line.trim_start();
            if let Some(rest) = item.strip_prefix('-') {
                tags.push(rest.trim().to_string());
                continue;
            }
            // not a list item: leave list mode and fall through so the same
            // line still gets a chance to match as `key: value`
            mode = ScanMode::KeyValues;
        }

        let Some(colon) = line.find(':') else {
            // no colon, the line contributes nothing
            continue;
        };

        let key = line[..colon].trim().to_lowercase();
        let value: String = line[colon + 1..]
            .trim()
            .chars()
            .filter(|c| *c != '\'' && *c != '"')
            .collect();

        if key == "tags" {
            // the tags key consumes no value of its own, it flips the scanner
            // into list mode for the following lines
            mode = ScanMode::ListBlock;
        } else {
            fields.insert(key, value);
        }
    }

    let tags = if tags.is_empty() { None } else { Some(tags) };

    let content = lines[closing + 1..].join("\n").trim().to_string();

    (FrontMatterBlock { fields, tags }, content)
}
