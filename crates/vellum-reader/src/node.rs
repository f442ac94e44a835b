//! Reader node - configuration and the main entry point.
//!
//! Architecture:
//! - Single process over a fixed relay set (WebSocket pool)
//! - Fetch -> score -> rank pipeline per topic load
//! - HTTP surface for pages and JSON

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use vellum_markup::Converter;
use vellum_relay::{Fetcher, RelayPool, Scorer, WsPool, DEFAULT_FETCH_WINDOW};

use crate::api;
use crate::error::Result;
use crate::select::Selector;
use crate::view::ViewState;

/// Relay set queried by a fresh node when none is configured.
pub const DEFAULT_RELAYS: &[&str] = &["wss://relay.damus.io", "wss://nos.lol"];

/// Configuration for a reader node.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Relay endpoints queried for records.
    pub relays: Vec<String>,

    /// HTTP listen address.
    pub listen_addr: SocketAddr,

    /// Collection window for each fetch.
    pub fetch_window: Duration,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ReaderConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        let relays = std::env::var("VELLUM_RELAYS")
            .map(|s| {
                s.split(',')
                    .map(|r| r.trim().to_string())
                    .filter(|r| !r.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| DEFAULT_RELAYS.iter().map(|r| r.to_string()).collect());

        let listen_addr = std::env::var("VELLUM_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid VELLUM_LISTEN_ADDR");

        let fetch_window = std::env::var("VELLUM_FETCH_WINDOW_MS")
            .ok()
            .and_then(|ms| ms.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_FETCH_WINDOW);

        Self {
            relays,
            listen_addr,
            fetch_window,
        }
    }
}

/// Shared state for the reader node.
///
/// The pipeline pieces are immutable after construction; only the view
/// state mutates, behind its own lock, so topic loads never hold a lock
/// across the network wait.
pub struct ReaderState {
    pub selector: Selector,
    pub converter: Converter,
    pub view: RwLock<ViewState>,
    pub config: ReaderConfig,
}

/// A reader node instance.
pub struct ReaderNode {
    state: Arc<ReaderState>,
    config: ReaderConfig,
}

impl ReaderNode {
    /// Create a node over the configured WebSocket relay set.
    pub fn new(config: ReaderConfig) -> Self {
        let pool = Arc::new(WsPool::new(config.relays.clone()));
        Self::with_pool(config, pool)
    }

    /// Create a node over a caller-supplied pool (tests, offline runs).
    pub fn with_pool(config: ReaderConfig, pool: Arc<dyn RelayPool>) -> Self {
        let fetcher = Fetcher::new(pool).with_window(config.fetch_window);
        let scorer = Scorer::new(fetcher.clone());
        let selector = Selector::new(fetcher, scorer);

        let state = Arc::new(ReaderState {
            selector,
            converter: Converter::new(),
            view: RwLock::new(ViewState::default()),
            config: config.clone(),
        });

        Self { state, config }
    }

    /// Get the shared state (for API handlers and tests).
    pub fn state(&self) -> Arc<ReaderState> {
        Arc::clone(&self.state)
    }

    /// Run the node: bind the listener and serve the HTTP surface.
    pub async fn run(self) -> Result<()> {
        tracing::info!("Reader node starting");
        tracing::info!("  HTTP: http://{}", self.config.listen_addr);
        tracing::info!("  Relays: {}", self.config.relays.join(", "));
        tracing::info!("  Fetch window: {:?}", self.config.fetch_window);

        let app = api::build_router(self.state.clone());

        let listener = tokio::net::TcpListener::bind(self.config.listen_addr).await?;
        tracing::info!("HTTP server listening on {}", self.config.listen_addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
