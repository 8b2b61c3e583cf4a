//! Bundle content model: raw section JSON to display entries and trees.
//!
//! SYSTEM CONTEXT
//! ==============
//! `entries` splits a bundle section into titled entries, `value` types each
//! entry's JSON into a `ContentValue`, and `normalize` turns that into the
//! `ContentNode` tree rendered by the card components. Everything here is
//! pure so both SSR and hydrate builds produce identical markup.

pub mod entries;
pub mod normalize;
pub mod value;

pub use entries::{Entry, extract_entries};
pub use normalize::{ContentNode, normalize};
pub use value::{ContentRecord, ContentValue};
