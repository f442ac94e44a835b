//! Vellum Relay
//!
//! Relay-network plumbing for the Vellum wiki reader.
//!
//! # Architecture
//!
//! - **Event**: the signed record model as it arrives off the wire
//! - **Filter**: subscription filters in relay wire form
//! - **Pool**: the connection-manager seam ([`RelayPool`]) with a
//!   WebSocket implementation ([`WsPool`]) and an in-memory substitute
//!   ([`StaticPool`])
//! - **Fetcher**: deadline-bounded collection of subscription results
//! - **Scorer**: counting positive reactions for a record
//!
//! Signature verification and relay-side storage semantics are the
//! relays' concern; records are used as received.

pub mod error;
pub mod event;
pub mod fetch;
pub mod filter;
pub mod pool;
pub mod score;
pub mod ws;

pub use error::{Error, Result};
pub use event::{kind, Event};
pub use fetch::{Fetcher, DEFAULT_FETCH_WINDOW};
pub use filter::Filter;
pub use pool::{RelayPool, StaticPool, Subscription, SubscriptionItem};
pub use score::{Scorer, APPROVAL};
pub use ws::WsPool;
