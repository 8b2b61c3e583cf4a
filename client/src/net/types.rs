//! Wire DTOs for the patch-notes JSON API.
//!
//! DESIGN
//! ======
//! The backend omits or nulls whole sections for thin patches. Every field
//! therefore deserializes to an empty default instead of failing, so a partial
//! bundle still renders with "No data" placeholders. A section sent as any
//! falsy scalar (`false`, `0`, `""`) counts as empty too.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::content::value::is_truthy;

/// Aggregated display payload for one patch version.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Bundle {
    /// Dashed patch identifier (e.g. `"15-12"`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
    /// Short developer tagline shown above the tabs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tagline: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub highlights: Highlights,
    /// Champion name -> content.
    #[serde(default = "empty_section", deserialize_with = "falsy_as_empty_section")]
    pub champions: Value,
    /// Item name -> content.
    #[serde(default = "empty_section", deserialize_with = "falsy_as_empty_section")]
    pub items: Value,
    /// Everything that is neither a champion nor an item.
    #[serde(default = "empty_section", deserialize_with = "falsy_as_empty_section")]
    pub other: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub arena: Arena,
}

impl Default for Bundle {
    fn default() -> Self {
        Self {
            version: String::new(),
            tagline: String::new(),
            highlights: Highlights::default(),
            champions: empty_section(),
            items: empty_section(),
            other: empty_section(),
            arena: Arena::default(),
        }
    }
}

/// Patch highlights infographic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Highlights {
    /// Image URL or site-relative path.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alt: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub caption: String,
}

/// Arena game-mode changes plus arena mentions found elsewhere in the notes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Arena {
    #[serde(default = "empty_section", deserialize_with = "falsy_as_empty_section")]
    pub arena: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mentions: Vec<ArenaMention>,
}

impl Default for Arena {
    fn default() -> Self {
        Self { arena: empty_section(), mentions: Vec::new() }
    }
}

/// One arena reference outside the arena section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ArenaMention {
    /// Where the mention appeared (e.g. a champion name).
    #[serde(default, deserialize_with = "null_as_default")]
    pub context: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

/// Response of `/versions/`: recent dashed versions, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct VersionList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub versions: Vec<String>,
}

/// Response of `/summary/`. Generation problems come back as a null
/// `summary` plus an `error` field the viewer ignores.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    pub summary: Option<String>,
}

impl SummaryResponse {
    /// Summary text, empty when none was generated.
    #[must_use]
    pub fn into_text(self) -> String {
        self.summary.unwrap_or_default()
    }
}

fn empty_section() -> Value {
    Value::Object(Map::new())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn falsy_as_empty_section<'de, D>(deserializer: D) -> Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(if is_truthy(&value) { value } else { empty_section() })
}
