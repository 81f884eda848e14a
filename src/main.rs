//! Inventory BFF gateway
//!
//! Public entry point forwarding product and warehouse requests to their
//! backend services.

use inventory_bff::{config::GatewayConfig, gateway, server};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_tracing();

    let config = GatewayConfig::from_env()?;
    info!("Configuration loaded: {:?}", config);

    let app = gateway::gateway_router(&config)?;
    server::serve(app, &config.server).await
}
