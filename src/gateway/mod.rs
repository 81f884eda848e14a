//! Backend-for-frontend gateway
//!
//! Stateless proxy exposing the product and warehouse routes and forwarding
//! each request to the matching backend service.

pub mod client;
pub mod proxy;
pub mod route;

pub use client::{BackendClient, BackendResponse};
pub use proxy::{proxy_router, ResourceProxy};
pub use route::{BackendRoute, ResourceRoutes};

use crate::api::health_router;
use crate::config::GatewayConfig;
use crate::models::{Entity, Product, Warehouse};
use crate::server;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;

/// Complete gateway router: both resources, health check and middleware
pub fn gateway_router(config: &GatewayConfig) -> anyhow::Result<Router> {
    let client = BackendClient::new(Duration::from_secs(config.backend_timeout_secs))?;

    let products = Arc::new(ResourceProxy::new(client.clone(), config.products.clone()));
    let warehouses = Arc::new(ResourceProxy::new(client, config.warehouses.clone()));

    let router = proxy_router(Product::RESOURCE, products)
        .merge(proxy_router(Warehouse::RESOURCE, warehouses))
        .merge(health_router("gateway"));

    Ok(server::with_middleware(router))
}
