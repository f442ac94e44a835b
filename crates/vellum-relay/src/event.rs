//! Signed records retrieved from the relay network.

use serde::{Deserialize, Serialize};

/// Record kinds used by the wiki reader.
pub mod kind {
    /// Wiki article, replaceable per author and `d` tag.
    pub const WIKI_ARTICLE: u32 = 30818;
    /// Reaction referencing another record.
    pub const REACTION: u32 = 7;
}

/// A signed, immutable record from the relay network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// Record id (hex).
    pub id: String,
    /// Author public key (hex).
    pub pubkey: String,
    /// Creation timestamp, seconds since the epoch.
    pub created_at: u64,
    /// Record kind.
    pub kind: u32,
    /// Ordered tag entries; each tag is an ordered list of strings,
    /// e.g. `["d", "topic-slug"]` or `["title", "Display Name"]`.
    #[serde(default)]
    pub tags: Vec<Vec<String>>,
    /// Free-text body.
    pub content: String,
    /// Signature (hex). Verified by the relays, carried opaquely here.
    #[serde(default)]
    pub sig: String,
}

impl Event {
    /// Value of the first tag named `name`, if present.
    pub fn tag_value(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.first().is_some_and(|n| n == name))
            .and_then(|t| t.get(1))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_value_returns_first_match() {
        let event = Event {
            id: "id".into(),
            pubkey: "pk".into(),
            created_at: 0,
            kind: kind::WIKI_ARTICLE,
            tags: vec![
                vec!["d".into(), "rust".into()],
                vec!["title".into(), "Rust".into()],
                vec!["title".into(), "Shadowed".into()],
            ],
            content: String::new(),
            sig: String::new(),
        };

        assert_eq!(event.tag_value("title"), Some("Rust"));
        assert_eq!(event.tag_value("d"), Some("rust"));
        assert_eq!(event.tag_value("e"), None);
    }

    #[test]
    fn deserializes_wire_record() {
        let json = r#"{
            "id": "abc",
            "pubkey": "def",
            "created_at": 1700000000,
            "kind": 30818,
            "tags": [["d", "rust"], ["title", "Rust"]],
            "content": "= Rust",
            "sig": "00ff"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, kind::WIKI_ARTICLE);
        assert_eq!(event.tag_value("d"), Some("rust"));
        assert_eq!(event.content, "= Rust");
    }

    #[test]
    fn missing_tags_and_sig_default_empty() {
        let json = r#"{
            "id": "abc",
            "pubkey": "def",
            "created_at": 0,
            "kind": 7,
            "content": "+"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert!(event.tags.is_empty());
        assert!(event.sig.is_empty());
    }
}
