//! Shared helpers for the integration tests
#![allow(dead_code)]

use axum::Router;
use inventory_bff::{
    api,
    config::{GatewayConfig, ServerConfig},
    gateway::{self, ResourceRoutes},
    models::{Product, Warehouse},
    store::EntityStore,
};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Start a product service with an empty collection
pub async fn spawn_product_service() -> String {
    let store = Arc::new(EntityStore::<Product>::new());
    spawn(api::service_router("product-service", store)).await
}

/// Start a warehouse service with an empty collection
pub async fn spawn_warehouse_service() -> String {
    let store = Arc::new(EntityStore::<Warehouse>::new());
    spawn(api::service_router("warehouse-service", store)).await
}

/// Gateway configuration pointing at the given service base URLs
pub fn gateway_config(product_base: &str, warehouse_base: &str, timeout_secs: u64) -> GatewayConfig {
    GatewayConfig {
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        products: ResourceRoutes::uniform(&format!("{}/api/products", product_base)).unwrap(),
        warehouses: ResourceRoutes::uniform(&format!("{}/api/warehouses", warehouse_base))
            .unwrap(),
        backend_timeout_secs: timeout_secs,
    }
}

/// Start a gateway in front of the given services
pub async fn spawn_gateway(product_base: &str, warehouse_base: &str) -> String {
    let config = gateway_config(product_base, warehouse_base, 5);
    spawn(gateway::gateway_router(&config).unwrap()).await
}
