//! Vellum Reader - ranked wiki articles from a relay network.
//!
//! A read-only viewer node: it fetches competing versions of a wiki
//! article from the configured relays, ranks them by positive reaction
//! count, renders the winner's markup body to HTML, and serves the result
//! over HTTP alongside a two-pane comparison view.
//!
//! # Architecture
//!
//! - **Select**: fetch -> score -> rank pipeline for a topic
//! - **Article**: pure record-to-render-model mapping
//! - **View**: pane occupancy and the superseded-load guard
//! - **Page**: server-rendered HTML for the browser surface
//! - **Api**: HTTP endpoints (pages + JSON)
//! - **Node**: configuration and wiring
//!
//! # Example
//!
//! ```no_run
//! use vellum_reader::{ReaderConfig, ReaderNode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ReaderConfig::default();
//!     let node = ReaderNode::new(config);
//!     node.run().await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod article;
pub mod error;
pub mod node;
pub mod page;
pub mod select;
pub mod view;

pub use article::{Candidate, RenderedArticle};
pub use error::{Error, Result};
pub use node::{ReaderConfig, ReaderNode, ReaderState, DEFAULT_RELAYS};
pub use select::{RankedTopic, Selector, TopicView};
pub use view::ViewState;
