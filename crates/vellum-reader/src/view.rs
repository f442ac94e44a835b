//! View state: which record occupies which pane.

use serde::Serialize;

/// Pane occupancy and comparison mode for the reader.
///
/// Owned by the node and mutated only by user actions (search,
/// compare-select). Topic loads carry a generation token: a load that was
/// superseded by a newer one is rejected at commit time, so a stale flow
/// can never win the pane over the load that replaced it.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ViewState {
    /// Slug of the currently loaded topic.
    pub topic: Option<String>,
    /// Record id in the primary pane.
    pub primary: Option<String>,
    /// Record id in the secondary pane.
    pub secondary: Option<String>,
    /// Whether the comparison layout is active.
    pub compare: bool,
    /// Token of the most recently issued load.
    #[serde(skip)]
    generation: u64,
}

impl ViewState {
    /// Hand out the token for a new load; newer tokens supersede older
    /// ones.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Commit a finished load into the primary pane.
    ///
    /// Returns `false` and leaves the state untouched when a newer load
    /// has been issued since `token` was handed out.
    pub fn commit_load(&mut self, token: u64, slug: &str, primary: &str) -> bool {
        if token != self.generation {
            return false;
        }
        self.topic = Some(slug.to_string());
        self.primary = Some(primary.to_string());
        self.secondary = None;
        self.compare = false;
        true
    }

    /// Commit a load that found nothing: the panes empty out.
    pub fn commit_not_found(&mut self, token: u64, slug: &str) -> bool {
        if token != self.generation {
            return false;
        }
        self.topic = Some(slug.to_string());
        self.primary = None;
        self.secondary = None;
        self.compare = false;
        true
    }

    /// Put a record in the secondary pane and activate comparison.
    pub fn select_comparison(&mut self, secondary: &str) {
        self.secondary = Some(secondary.to_string());
        self.compare = true;
    }
}
