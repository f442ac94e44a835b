//! Deadline-bounded collection of subscription results.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::event::Event;
use crate::filter::Filter;
use crate::pool::{RelayPool, SubscriptionItem};

/// Default collection window.
pub const DEFAULT_FETCH_WINDOW: Duration = Duration::from_millis(5000);

/// Collects matching records from a relay pool.
///
/// A fetch resolves with whatever matched once the pool reports
/// end-of-stored-data or once the window elapses, whichever happens
/// first. The race resolves exactly once: `select!` commits to a single
/// branch, so completion and deadline cannot both win.
///
/// An empty result is a valid, non-error outcome. There is no retry: a
/// relay that stays silent simply contributes nothing within the window.
#[derive(Clone)]
pub struct Fetcher {
    pool: Arc<dyn RelayPool>,
    window: Duration,
}

impl Fetcher {
    pub fn new(pool: Arc<dyn RelayPool>) -> Self {
        Self {
            pool,
            window: DEFAULT_FETCH_WINDOW,
        }
    }

    /// Override the collection window.
    #[must_use]
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Collect every record matching `filter`, bounded by the window.
    pub async fn collect(&self, filter: &Filter) -> Vec<Event> {
        let mut subscription = self.pool.subscribe(filter).await;
        let mut events = Vec::new();

        let deadline = tokio::time::sleep(self.window);
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                _ = &mut deadline => {
                    debug!(collected = events.len(), "fetch window elapsed");
                    break;
                }
                item = subscription.next() => match item {
                    Some(SubscriptionItem::Event(event)) => events.push(event),
                    Some(SubscriptionItem::EndOfStored) => {
                        debug!(collected = events.len(), "end of stored data");
                        break;
                    }
                    None => break,
                },
            }
        }

        events
    }
}
