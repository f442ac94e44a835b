//! Vellum reader binary
//!
//! A read-only wiki viewer over a decentralized relay network.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vellum_reader::{ReaderConfig, ReaderNode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vellum_reader=info,vellum_relay=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Vellum reader");

    let config = ReaderConfig::default();

    let node = ReaderNode::new(config);
    node.run().await?;

    Ok(())
}
