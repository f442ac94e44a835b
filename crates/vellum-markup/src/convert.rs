//! Wiki markup to HTML conversion.
//!
//! The converter is an ordered pipeline of text substitutions: every rule
//! rewrites the output of the previous one, and no rule re-scans its own
//! output. Unmatched markers are left literal, so conversion is total over
//! all inputs.
//!
//! Input text is not escaped: HTML-significant characters pass through
//! untouched. Sanitization, where needed, belongs to the embedding surface.

use regex::{Captures, Regex};

use crate::slug::topic_slug;

/// Wiki markup to HTML converter.
///
/// Compiles its patterns once at construction; [`convert`](Self::convert)
/// is cheap and reusable across documents.
pub struct Converter {
    heading1: Regex,
    heading2: Regex,
    heading3: Regex,
    strong: Regex,
    emphasis: Regex,
    code: Regex,
    code_block: Regex,
    quote: Regex,
    image: Regex,
    wikilink: Regex,
    wikilink_labeled: Regex,
    bare_link: Regex,
    nostr_ref: Regex,
}

impl Converter {
    pub fn new() -> Self {
        Self {
            heading1: Regex::new(r"(?m)^= (.*)$").unwrap(),
            heading2: Regex::new(r"(?m)^== (.*)$").unwrap(),
            heading3: Regex::new(r"(?m)^=== (.*)$").unwrap(),
            strong: Regex::new(r"\*([^*]+)\*").unwrap(),
            emphasis: Regex::new(r"_([^_]+)_").unwrap(),
            code: Regex::new(r"`([^`]+)`").unwrap(),
            code_block: Regex::new(r"(?ms)^----\n(.*?)\n----$").unwrap(),
            quote: Regex::new(r"(?m)^> (.*)$").unwrap(),
            image: Regex::new(r"image::([^\[\s]+)\[([^\]]*)\]").unwrap(),
            wikilink: Regex::new(r"\[\[([^\]|]+)\]\]").unwrap(),
            wikilink_labeled: Regex::new(r"\[\[([^\]|]+)\|([^\]]+)\]\]").unwrap(),
            bare_link: Regex::new(r"http(s)?://([^\s\[]+)\[\]").unwrap(),
            nostr_ref: Regex::new(r"nostr:(npub|nprofile|note|nevent)(\w+)").unwrap(),
        }
    }

    /// Convert a wiki markup document body into an HTML fragment.
    pub fn convert(&self, body: &str) -> String {
        let html = self.heading1.replace_all(body, "<h1>${1}</h1>");
        let html = self.heading2.replace_all(&html, "<h2>${1}</h2>");
        let html = self.heading3.replace_all(&html, "<h3>${1}</h3>");
        let html = self.strong.replace_all(&html, "<strong>${1}</strong>");
        let html = self.emphasis.replace_all(&html, "<em>${1}</em>");
        let html = self.code.replace_all(&html, "<code>${1}</code>");
        let html = self
            .code_block
            .replace_all(&html, "<pre><code>${1}</code></pre>");
        let html = self
            .quote
            .replace_all(&html, "<blockquote>${1}</blockquote>");
        let html = self
            .image
            .replace_all(&html, r#"<img src="${1}" alt="${2}">"#);

        // Plain wikilinks first; their pattern excludes `|`, so labeled
        // links survive to the second rule untouched.
        let html = self.wikilink.replace_all(&html, |caps: &Captures| {
            let target = &caps[1];
            format!(r#"<a href="/wiki/{}">{}</a>"#, topic_slug(target), target)
        });
        let html = self.wikilink_labeled.replace_all(&html, |caps: &Captures| {
            format!(
                r#"<a href="/wiki/{}">{}</a>"#,
                topic_slug(&caps[1]),
                &caps[2]
            )
        });

        let html = self
            .bare_link
            .replace_all(&html, r#"<a href="http${1}://${2}">${2}</a>"#);
        let html = self.nostr_ref.replace_all(
            &html,
            r#"<a href="https://nostr.com/${1}${2}" target="_blank">${1}${2}</a>"#,
        );

        // Double line-breaks split paragraphs; the whole fragment gets one
        // enclosing paragraph.
        let html = html.replace("\n\n", "</p><p>");
        format!("<p>{html}</p>")
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
