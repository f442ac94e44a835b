//! The relay pool seam.
//!
//! Fetching code talks to a [`RelayPool`] rather than a concrete socket
//! pool, so the network can be swapped for an in-memory substitute in
//! tests. The real implementation lives in [`crate::ws`].

use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::event::Event;
use crate::filter::Filter;

/// Items delivered by a subscription.
#[derive(Debug, Clone)]
pub enum SubscriptionItem {
    /// A matching record arrived.
    Event(Event),
    /// A participating relay has delivered all of its stored matches.
    EndOfStored,
}

/// A live subscription across a pool's relays.
///
/// Per-relay end-of-stored signals are aggregated: [`next`](Self::next)
/// yields [`SubscriptionItem::EndOfStored`] once, after the last
/// participating relay reports it. Dropping the subscription tears down
/// the relay tasks feeding it.
pub struct Subscription {
    rx: mpsc::Receiver<SubscriptionItem>,
    pending_ends: usize,
}

impl Subscription {
    /// Build a subscription fed by `rx`, expecting one end signal per
    /// participating relay.
    pub fn new(rx: mpsc::Receiver<SubscriptionItem>, relay_count: usize) -> Self {
        Self {
            rx,
            pending_ends: relay_count.max(1),
        }
    }

    /// Next item, or `None` once the feeding tasks are gone.
    pub async fn next(&mut self) -> Option<SubscriptionItem> {
        loop {
            match self.rx.recv().await? {
                SubscriptionItem::Event(event) => return Some(SubscriptionItem::Event(event)),
                SubscriptionItem::EndOfStored => {
                    self.pending_ends = self.pending_ends.saturating_sub(1);
                    if self.pending_ends == 0 {
                        return Some(SubscriptionItem::EndOfStored);
                    }
                }
            }
        }
    }
}

/// A shared, long-lived connection manager reused across all queries.
///
/// Implementations absorb relay-level failures: a relay that cannot be
/// reached contributes no records and counts as immediately ended.
#[async_trait]
pub trait RelayPool: Send + Sync {
    /// Open a subscription for `filter` on every configured relay.
    async fn subscribe(&self, filter: &Filter) -> Subscription;
}

/// In-memory pool serving canned records.
///
/// Substitutes for the network in tests and offline runs: every
/// subscription is answered from the stored set via [`Filter::matches`],
/// followed by the end-of-stored signal. The signal can be suppressed to
/// exercise deadline-bounded collection.
pub struct StaticPool {
    events: Vec<Event>,
    end_of_stored: bool,
    subscribed: Mutex<Vec<Filter>>,
}

impl StaticPool {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            end_of_stored: true,
            subscribed: Mutex::new(Vec::new()),
        }
    }

    /// Suppress the end-of-stored signal, so collection can only finish
    /// by deadline.
    #[must_use]
    pub fn without_end_signal(mut self) -> Self {
        self.end_of_stored = false;
        self
    }

    /// Filters of every subscription opened so far, in order.
    pub fn subscribed_filters(&self) -> Vec<Filter> {
        self.subscribed.lock().unwrap().clone()
    }
}

#[async_trait]
impl RelayPool for StaticPool {
    async fn subscribe(&self, filter: &Filter) -> Subscription {
        self.subscribed.lock().unwrap().push(filter.clone());

        let matching: Vec<Event> = self
            .events
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();

        let (tx, rx) = mpsc::channel(matching.len() + 1);
        for event in matching {
            let _ = tx.send(SubscriptionItem::Event(event)).await;
        }

        if self.end_of_stored {
            let _ = tx.send(SubscriptionItem::EndOfStored).await;
        } else {
            // Park a sender so the channel stays open until the
            // subscription is dropped.
            tokio::spawn(async move { tx.closed().await });
        }

        Subscription::new(rx, 1)
    }
}
