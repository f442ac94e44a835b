//! Subscription filters in relay wire form.

use serde::{Deserialize, Serialize};

use crate::event::Event;

/// A subscription filter: record kinds plus optional tag constraints.
///
/// Serializes to the wire shape the relays expect, e.g.
/// `{"kinds":[30818],"#d":["topic-slug"]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Record kinds to match.
    pub kinds: Vec<u32>,

    /// Constraint on `d` tag values.
    #[serde(rename = "#d", skip_serializing_if = "Option::is_none")]
    pub d_tags: Option<Vec<String>>,

    /// Constraint on `e` tag values (referenced record ids).
    #[serde(rename = "#e", skip_serializing_if = "Option::is_none")]
    pub e_tags: Option<Vec<String>>,
}

impl Filter {
    /// Filter matching a single record kind.
    pub fn kind(kind: u32) -> Self {
        Self {
            kinds: vec![kind],
            ..Default::default()
        }
    }

    /// Require a `d` tag with the given value.
    #[must_use]
    pub fn d_tag(mut self, value: impl Into<String>) -> Self {
        self.d_tags.get_or_insert_with(Vec::new).push(value.into());
        self
    }

    /// Require an `e` tag with the given value.
    #[must_use]
    pub fn e_tag(mut self, value: impl Into<String>) -> Self {
        self.e_tags.get_or_insert_with(Vec::new).push(value.into());
        self
    }

    /// The subscription predicate: does `event` satisfy this filter?
    ///
    /// Mirrors relay-side matching so in-memory pools behave like the
    /// network.
    pub fn matches(&self, event: &Event) -> bool {
        if !self.kinds.contains(&event.kind) {
            return false;
        }
        self.tag_constraint_holds(&self.d_tags, "d", event)
            && self.tag_constraint_holds(&self.e_tags, "e", event)
    }

    fn tag_constraint_holds(
        &self,
        values: &Option<Vec<String>>,
        name: &str,
        event: &Event,
    ) -> bool {
        match values {
            None => true,
            Some(wanted) => event.tags.iter().any(|t| {
                t.first().is_some_and(|n| n == name)
                    && t.get(1).is_some_and(|v| wanted.contains(v))
            }),
        }
    }
}
