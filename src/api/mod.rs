//! API module
//!
//! HTTP request handlers of the entity collection services

pub mod entities;
pub mod health;

pub use entities::entity_router;
pub use health::health_router;

use crate::models::Entity;
use crate::server;
use crate::store::EntityStore;
use axum::Router;
use std::sync::Arc;

/// Complete router of one collection service: CRUD routes, health check and
/// the shared middleware stack
pub fn service_router<T: Entity>(service: &'static str, store: Arc<EntityStore<T>>) -> Router {
    server::with_middleware(entity_router(store).merge(health_router(service)))
}
