//! Warehouse collection service

use inventory_bff::{
    api,
    config::{ServerConfig, WAREHOUSE_SERVICE_DEFAULT_PORT},
    models::Warehouse,
    server,
    store::EntityStore,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_tracing();

    let config = ServerConfig::from_env(WAREHOUSE_SERVICE_DEFAULT_PORT);
    let store = Arc::new(EntityStore::<Warehouse>::new());

    let app = api::service_router("warehouse-service", store);
    server::serve(app, &config).await
}
