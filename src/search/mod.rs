use strsim::jaro_winkler;

/// Minimum similarity a record must reach against the query to be returned.
const SIMILARITY_THRESHOLD: f64 = 0.8;

/// One weighted text field of a record, as fed into the index.
pub struct SearchField {
    pub weight: f64,
    pub text: String,
}

impl SearchField {
    pub fn new(weight: f64, text: impl Into<String>) -> Self {
        Self {
            weight,
            text: text.into(),
        }
    }
}

/// Implemented by record types that want to be searchable.
pub trait Searchable {
    fn search_fields(&self) -> Vec<SearchField>;
}

struct IndexedField {
    weight: f64,
    tokens: Vec<String>,
}

struct IndexedDoc {
    fields: Vec<IndexedField>,
}

/// A read-only fuzzy index over one record collection.
///
/// Built once at startup, queried many times. `search` returns the positions
/// of matching records in the original collection, best match first; equal
/// scores keep the collection order (stable sort). Callers are responsible
/// for the empty-query bypass: an empty or whitespace-only query means "no
/// filtering" and must never reach the index.
pub struct SearchIndex {
    docs: Vec<IndexedDoc>,
}

impl SearchIndex {
    pub fn build<T: Searchable>(records: &[T]) -> Self {
        let docs = records
            .iter()
            .map(|record| IndexedDoc {
                fields: record
                    .search_fields()
                    .into_iter()
                    .map(|field| IndexedField {
                        weight: field.weight,
                        tokens: tokenize(&field.text),
                    })
                    .collect(),
            })
            .collect();

        Self { docs }
    }

    pub fn search(&self, query: &str) -> Vec<usize> {
        let query_tokens = tokenize(query);
        if query_tokens.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<(usize, f64)> = self
            .docs
            .iter()
            .enumerate()
            .filter_map(|(position, doc)| {
                let score = doc_score(doc, &query_tokens);
                (score >= SIMILARITY_THRESHOLD).then_some((position, score))
            })
            .collect();

        // stable: ties keep original collection order
        hits.sort_by(|a, b| b.1.total_cmp(&a.1));

        hits.into_iter().map(|(position, _)| position).collect()
    }
}

// a record scores as its best field, a field scores as the average over query
// tokens of the closest token it holds
fn doc_score(doc: &IndexedDoc, query_tokens: &[String]) -> f64 {
    doc.fields
        .iter()
        .map(|field| field.weight * field_score(&field.tokens, query_tokens))
        .fold(0.0, f64::max)
}

fn field_score(field_tokens: &[String], query_tokens: &[String]) -> f64 {
    if field_tokens.is_empty() {
        return 0.0;
    }

    let total: f64 = query_tokens
        .iter()
        .map(|query_token| {
            field_tokens
                .iter()
                .map(|token| jaro_winkler(query_token, token))
                .fold(0.0, f64::max)
        })
        .sum();

    total / query_tokens.len() as f64
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
