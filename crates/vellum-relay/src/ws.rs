//! WebSocket relay pool.
//!
//! One task per relay per subscription: each task opens a socket, sends
//! the `REQ` frame, forwards matching records, and translates the relay's
//! end-of-stored frame into the pool-level end signal. Relay failures are
//! absorbed - an unreachable or misbehaving relay contributes nothing and
//! counts as immediately ended.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, warn};

use crate::error::Result;
use crate::event::Event;
use crate::filter::Filter;
use crate::pool::{RelayPool, Subscription, SubscriptionItem};

/// Connection manager over a fixed set of WebSocket relay endpoints.
///
/// The endpoint list is process-wide configuration: set once at startup
/// and shared by every query for the life of the process.
pub struct WsPool {
    relays: Vec<String>,
    next_sub_id: AtomicU64,
}

impl WsPool {
    pub fn new(relays: Vec<String>) -> Self {
        Self {
            relays,
            next_sub_id: AtomicU64::new(0),
        }
    }

    /// The configured relay endpoints.
    pub fn relays(&self) -> &[String] {
        &self.relays
    }
}

#[async_trait]
impl RelayPool for WsPool {
    async fn subscribe(&self, filter: &Filter) -> Subscription {
        let sub_id = format!("vellum-{}", self.next_sub_id.fetch_add(1, Ordering::Relaxed));
        let (tx, rx) = mpsc::channel(64);

        for relay in &self.relays {
            tokio::spawn(relay_task(
                relay.clone(),
                sub_id.clone(),
                filter.clone(),
                tx.clone(),
            ));
        }

        Subscription::new(rx, self.relays.len())
    }
}

/// Drive one relay for the lifetime of a subscription, guaranteeing
/// exactly one end signal no matter how the connection ends.
async fn relay_task(
    relay: String,
    sub_id: String,
    filter: Filter,
    tx: mpsc::Sender<SubscriptionItem>,
) {
    let mut ended = false;
    if let Err(e) = drive_relay(&relay, &sub_id, &filter, &tx, &mut ended).await {
        warn!(relay = %relay, error = %e, "relay subscription ended with error");
    }
    if !ended {
        let _ = tx.send(SubscriptionItem::EndOfStored).await;
    }
}

async fn drive_relay(
    relay: &str,
    sub_id: &str,
    filter: &Filter,
    tx: &mpsc::Sender<SubscriptionItem>,
    ended: &mut bool,
) -> Result<()> {
    let (stream, _) = connect_async(relay).await?;
    let (mut sink, mut source) = stream.split();

    let req = serde_json::to_string(&json!(["REQ", sub_id, filter]))?;
    sink.send(Message::Text(req)).await?;
    debug!(relay, sub_id, "subscription opened");

    loop {
        tokio::select! {
            // Receiver gone: the subscription was dropped upstream.
            _ = tx.closed() => break,
            frame = source.next() => {
                let Some(frame) = frame else { break };
                match frame? {
                    Message::Text(text) => match parse_frame(&text, sub_id) {
                        RelayFrame::Event(event) => {
                            if tx.send(SubscriptionItem::Event(*event)).await.is_err() {
                                break;
                            }
                        }
                        RelayFrame::EndOfStored => {
                            *ended = true;
                            if tx.send(SubscriptionItem::EndOfStored).await.is_err() {
                                break;
                            }
                        }
                        RelayFrame::Ignored => {}
                    },
                    Message::Ping(payload) => sink.send(Message::Pong(payload)).await?,
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    }

    // Best effort: tell the relay the subscription is gone.
    let close = serde_json::to_string(&json!(["CLOSE", sub_id]))?;
    let _ = sink.send(Message::Text(close)).await;

    Ok(())
}

/// Decoded relay frames relevant to a subscription.
#[derive(Debug, PartialEq)]
enum RelayFrame {
    Event(Box<Event>),
    EndOfStored,
    Ignored,
}

/// Decode one relay frame for the subscription `sub_id`.
///
/// Malformed frames and frames for other subscriptions decode to
/// [`RelayFrame::Ignored`]; the caller drops them silently.
fn parse_frame(text: &str, sub_id: &str) -> RelayFrame {
    let Ok(Value::Array(parts)) = serde_json::from_str::<Value>(text) else {
        return RelayFrame::Ignored;
    };

    match (parts.first().and_then(Value::as_str), parts.get(1).and_then(Value::as_str)) {
        (Some("EVENT"), Some(id)) if id == sub_id => parts
            .get(2)
            .cloned()
            .and_then(|v| serde_json::from_value::<Event>(v).ok())
            .map(|event| RelayFrame::Event(Box::new(event)))
            .unwrap_or(RelayFrame::Ignored),
        (Some("EOSE"), Some(id)) if id == sub_id => RelayFrame::EndOfStored,
        _ => RelayFrame::Ignored,
    }
}
