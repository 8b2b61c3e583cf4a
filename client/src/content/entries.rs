//! Entry Extractor: one bundle section to an ordered list of titled entries.

#[cfg(test)]
#[path = "entries_test.rs"]
mod entries_test;

use serde_json::Value;

use super::value::{ContentValue, coerce_text};

/// Title used when a section is a bare scalar.
pub const SCALAR_ENTRY_TITLE: &str = "Content";

/// One card's worth of section data.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub title: String,
    pub content: ContentValue,
}

/// Split a section into entries, preserving the section's own order.
///
/// - `null` yields nothing.
/// - Arrays yield `Item 1`, `Item 2`, ... per element.
/// - Objects yield one entry per key, titled by the key.
/// - Any other scalar yields a single `Content` entry.
#[must_use]
pub fn extract_entries(section: &Value) -> Vec<Entry> {
    match section {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| Entry { title: format!("Item {}", i + 1), content: ContentValue::from_json(item) })
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| Entry { title: key.clone(), content: ContentValue::from_json(value) })
            .collect(),
        other => vec![Entry { title: SCALAR_ENTRY_TITLE.to_owned(), content: ContentValue::Text(coerce_text(other)) }],
    }
}
