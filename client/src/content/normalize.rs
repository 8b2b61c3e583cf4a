//! Content Normalizer: `ContentValue` to a renderable display tree.

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;

use super::value::{ContentRecord, ContentValue};

/// Display tree consumed by `components::content_view`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentNode {
    /// Plain text line.
    Text(String),
    /// Unnumbered list of single-line items.
    List(Vec<String>),
    /// Highlighted aside.
    Note(String),
    /// Preformatted key-value block (pretty JSON).
    KeyValues(String),
    /// Children rendered top to bottom.
    Stack(Vec<ContentNode>),
}

/// Map a value to its display tree. Records render nested content first,
/// then the note, then any remaining keys.
#[must_use]
pub fn normalize(value: &ContentValue) -> ContentNode {
    match value {
        ContentValue::Text(text) => ContentNode::Text(text.clone()),
        ContentValue::List(lines) => ContentNode::List(lines.clone()),
        ContentValue::Record(record) => ContentNode::Stack(record_children(record)),
    }
}

fn record_children(record: &ContentRecord) -> Vec<ContentNode> {
    let mut children = Vec::with_capacity(3);
    if let Some(inner) = record.content.as_deref() {
        children.push(normalize(inner));
    }
    if let Some(note) = &record.note {
        children.push(ContentNode::Note(note.clone()));
    }
    if !record.rest.is_empty() {
        let block = serde_json::to_string_pretty(&record.rest).unwrap_or_default();
        children.push(ContentNode::KeyValues(block));
    }
    children
}
