//! Patch version encodings.
//!
//! The API and bundles carry dashed identifiers (`15-12`); the UI shows
//! dotted ones (`15.12`). Conversion is a plain character substitution, so a
//! round trip is only lossless when components contain neither separator.

#[cfg(test)]
#[path = "version_test.rs"]
mod version_test;

/// Browser title used before any version has loaded.
pub const DEFAULT_TITLE: &str = "League of Legends Patchnote Summarizer";

/// `15-12` -> `15.12`.
#[must_use]
pub fn to_dotted(dashed: &str) -> String {
    dashed.replace('-', ".")
}

/// `15.12` -> `15-12`.
#[must_use]
pub fn to_dashed(dotted: &str) -> String {
    dotted.replace('.', "-")
}

/// Document title for the currently displayed version.
#[must_use]
pub fn document_title(display_version: &str) -> String {
    if display_version.is_empty() {
        DEFAULT_TITLE.to_owned()
    } else {
        format!("Patchnote Summarizer - {display_version}")
    }
}
