//! Render model: mapping ranked records to displayable articles.
//!
//! The mapping is pure - a [`Candidate`] plus a converter yields a
//! [`RenderedArticle`] with no display surface involved. Only the HTTP
//! layer turns render models into pages.

use serde::Serialize;
use vellum_markup::Converter;
use vellum_relay::Event;

/// Fallback title for articles carrying neither a `title` nor a `d` tag.
pub const UNTITLED: &str = "Untitled";

/// How many characters of the author key are shown.
const AUTHOR_PREFIX_LEN: usize = 8;

/// A fetched article decorated with its approval count.
///
/// The record itself stays immutable; the count is the derived annotation
/// attached during ranking and discarded with the candidate.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub event: Event,
    pub approvals: usize,
}

impl Candidate {
    pub fn id(&self) -> &str {
        &self.event.id
    }

    /// Display title: first `title` tag, else the topic slug from the
    /// first `d` tag, else [`UNTITLED`].
    pub fn title(&self) -> &str {
        self.event
            .tag_value("title")
            .or_else(|| self.event.tag_value("d"))
            .unwrap_or(UNTITLED)
    }

    /// Truncated author identifier: the first 8 characters of the pubkey.
    pub fn author_short(&self) -> &str {
        let pubkey = &self.event.pubkey;
        match pubkey.char_indices().nth(AUTHOR_PREFIX_LEN) {
            Some((index, _)) => &pubkey[..index],
            None => pubkey,
        }
    }
}

/// A fully rendered article, ready for any display surface.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedArticle {
    pub id: String,
    pub title: String,
    pub author: String,
    pub approvals: usize,
    pub body_html: String,
}

impl RenderedArticle {
    /// Render a candidate's body and derive its display fields.
    pub fn from_candidate(candidate: &Candidate, converter: &Converter) -> Self {
        Self {
            id: candidate.id().to_string(),
            title: candidate.title().to_string(),
            author: candidate.author_short().to_string(),
            approvals: candidate.approvals,
            body_html: converter.convert(&candidate.event.content),
        }
    }
}
