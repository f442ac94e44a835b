//! Vellum Markup
//!
//! Topic normalization and wiki markup conversion for the Vellum reader.
//!
//! Article bodies on the wiki network use a lightweight structured-text
//! format (headings, emphasis, code, quotes, images, wikilinks). This crate
//! turns those bodies into HTML fragments and derives the canonical topic
//! slugs that wikilinks and lookups key on.
//!
//! Everything here is pure: no I/O, no async, no shared state.

mod convert;
mod slug;

pub use convert::Converter;
pub use slug::{topic_slug, SLUG_SEPARATOR};
