//! Product collection service

use inventory_bff::{
    api,
    config::{ServerConfig, PRODUCT_SERVICE_DEFAULT_PORT},
    models::Product,
    server,
    store::EntityStore,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_tracing();

    let config = ServerConfig::from_env(PRODUCT_SERVICE_DEFAULT_PORT);
    let store = Arc::new(EntityStore::<Product>::new());

    let app = api::service_router("product-service", store);
    server::serve(app, &config).await
}
