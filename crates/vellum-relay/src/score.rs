//! Reaction scoring: counting positive approval signals.

use crate::event::kind;
use crate::fetch::Fetcher;
use crate::filter::Filter;

/// Content marker of a positive approval signal.
pub const APPROVAL: &str = "+";

/// Counts positive reactions referencing a record.
#[derive(Clone)]
pub struct Scorer {
    fetcher: Fetcher,
}

impl Scorer {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Number of approval signals referencing `event_id`.
    ///
    /// Fetches every reaction with an `e` tag pointing at the record and
    /// counts those whose content equals [`APPROVAL`] exactly. Reactions
    /// carrying any other content are ignored - neither positive nor
    /// negative.
    pub async fn approvals(&self, event_id: &str) -> usize {
        let filter = Filter::kind(kind::REACTION).e_tag(event_id);
        self.fetcher
            .collect(&filter)
            .await
            .iter()
            .filter(|r| r.content == APPROVAL)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use crate::pool::StaticPool;
    use std::sync::Arc;

    fn reaction(id: &str, target: &str, content: &str) -> Event {
        Event {
            id: id.into(),
            pubkey: "pk".into(),
            created_at: 0,
            kind: kind::REACTION,
            tags: vec![vec!["e".into(), target.into()]],
            content: content.into(),
            sig: String::new(),
        }
    }

    fn scorer(events: Vec<Event>) -> Scorer {
        Scorer::new(Fetcher::new(Arc::new(StaticPool::new(events))))
    }

    #[tokio::test]
    async fn counts_only_exact_approvals() {
        let scorer = scorer(vec![
            reaction("r1", "article", "+"),
            reaction("r2", "article", "-"),
            reaction("r3", "article", "\u{1f919}"),
            reaction("r4", "article", "+"),
            reaction("r5", "article", "++"),
        ]);

        assert_eq!(scorer.approvals("article").await, 2);
    }

    #[tokio::test]
    async fn ignores_reactions_to_other_records() {
        let scorer = scorer(vec![
            reaction("r1", "article", "+"),
            reaction("r2", "other", "+"),
        ]);

        assert_eq!(scorer.approvals("article").await, 1);
    }

    #[tokio::test]
    async fn zero_reactions_is_zero() {
        assert_eq!(scorer(Vec::new()).approvals("article").await, 0);
    }
}
