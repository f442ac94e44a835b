//! Topic loading: fetch candidates, score them, rank by approvals.

use futures::future::join_all;
use tracing::{debug, info};
use vellum_markup::topic_slug;
use vellum_relay::{kind, Fetcher, Filter, Scorer};

use crate::article::Candidate;

/// Outcome of loading a topic.
#[derive(Debug)]
pub enum TopicView {
    /// No candidate articles exist for the slug. Terminal: no scoring
    /// happens for an empty topic.
    NotFound { slug: String },
    /// At least one candidate, ranked by approval count.
    Found(RankedTopic),
}

/// The candidates for a topic, ranked descending by approval count.
///
/// The sort is stable: candidates with equal counts keep their fetch
/// order.
#[derive(Debug)]
pub struct RankedTopic {
    pub slug: String,
    candidates: Vec<Candidate>,
}

impl RankedTopic {
    /// Build from candidates already in rank order. Callers guarantee at
    /// least one candidate.
    pub(crate) fn new(slug: String, candidates: Vec<Candidate>) -> Self {
        Self { slug, candidates }
    }

    /// The winning candidate, shown in the primary pane.
    pub fn primary(&self) -> &Candidate {
        &self.candidates[0]
    }

    /// Every candidate except the primary, in rank order.
    pub fn alternates(&self) -> &[Candidate] {
        &self.candidates[1..]
    }

    /// All candidates in rank order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Look up a candidate by record id.
    pub fn candidate(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id() == id)
    }
}

/// The fetch -> score -> rank pipeline.
#[derive(Clone)]
pub struct Selector {
    fetcher: Fetcher,
    scorer: Scorer,
}

impl Selector {
    pub fn new(fetcher: Fetcher, scorer: Scorer) -> Self {
        Self { fetcher, scorer }
    }

    /// Load every candidate article for a topic and rank by approvals.
    ///
    /// The input may be free-form; it is normalized to the canonical slug
    /// before the lookup. When nothing matches, no scoring queries are
    /// issued.
    pub async fn load_topic(&self, raw_topic: &str) -> TopicView {
        let slug = topic_slug(raw_topic);
        let filter = Filter::kind(kind::WIKI_ARTICLE).d_tag(slug.clone());
        let articles = self.fetcher.collect(&filter).await;

        if articles.is_empty() {
            info!(slug = %slug, "no articles found");
            return TopicView::NotFound { slug };
        }

        // Independent reads with no shared mutable state: score all
        // candidates concurrently. Completion order cannot affect the
        // ranking, only latency.
        let approvals = join_all(articles.iter().map(|a| self.scorer.approvals(&a.id))).await;

        let mut candidates: Vec<Candidate> = articles
            .into_iter()
            .zip(approvals)
            .map(|(event, approvals)| Candidate { event, approvals })
            .collect();

        // Stable sort: equal counts never reorder relative to fetch order.
        candidates.sort_by(|a, b| b.approvals.cmp(&a.approvals));

        debug!(slug = %slug, count = candidates.len(), "ranked candidates");
        TopicView::Found(RankedTopic::new(slug, candidates))
    }
}
