//! Typed view of heterogeneous entry content.
//!
//! DESIGN
//! ======
//! Backend sections carry arbitrary JSON. Instead of inspecting shapes at
//! render time, every value is classified once into `ContentValue` and the
//! renderer matches exhaustively on it. Classification is total: unknown
//! record shapes fall into `ContentRecord::rest` and are shown verbatim.

#[cfg(test)]
#[path = "value_test.rs"]
mod value_test;

use serde_json::{Map, Value};

/// Reserved record key holding nested content rendered before everything else.
pub const CONTENT_KEY: &str = "content";
/// Reserved record key holding a highlighted aside.
pub const NOTE_KEY: &str = "note";

/// Display-oriented classification of one JSON value.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentValue {
    /// Primitive coerced to text.
    Text(String),
    /// Array rendered as a bullet list, one line per element.
    List(Vec<String>),
    /// Object with optional reserved keys and a verbatim remainder.
    Record(ContentRecord),
}

/// Object content split into its reserved keys and everything else.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentRecord {
    pub content: Option<Box<ContentValue>>,
    pub note: Option<String>,
    /// Remaining keys in their original order.
    pub rest: Map<String, Value>,
}

impl ContentValue {
    /// Classify a JSON value. Never fails.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Array(items) => Self::List(items.iter().map(coerce_text).collect()),
            Value::Object(map) => Self::Record(ContentRecord::from_map(map)),
            other => Self::Text(coerce_text(other)),
        }
    }
}

impl ContentRecord {
    fn from_map(map: &Map<String, Value>) -> Self {
        let mut record = Self::default();
        for (key, value) in map {
            match key.as_str() {
                CONTENT_KEY => {
                    if is_truthy(value) {
                        record.content = Some(Box::new(ContentValue::from_json(value)));
                    }
                }
                NOTE_KEY => {
                    if is_truthy(value) {
                        record.note = Some(coerce_text(value));
                    }
                }
                _ => {
                    record.rest.insert(key.clone(), value.clone());
                }
            }
        }
        record
    }
}

/// String coercion for scalar values; structured values become compact JSON,
/// which keeps list elements to a single line.
#[must_use]
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Whether `value` holds something worth rendering: `null`, `false`, `0` and
/// `""` do not. Reserved keys and whole bundle sections both go by this.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
