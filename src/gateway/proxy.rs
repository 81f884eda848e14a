//! Gateway route handlers
//!
//! Each public route issues exactly one backend call. Get, list, create and
//! update relay the backend reply as-is; delete collapses it to 204 or 404.

use super::client::{BackendClient, BackendResponse};
use super::route::ResourceRoutes;
use crate::error::AppError;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use reqwest::Method;
use std::sync::Arc;

/// Backend routes plus client for one resource
#[derive(Debug, Clone)]
pub struct ResourceProxy {
    client: BackendClient,
    routes: ResourceRoutes,
}

impl ResourceProxy {
    /// Create a proxy for one resource
    pub fn new(client: BackendClient, routes: ResourceRoutes) -> Self {
        Self { client, routes }
    }
}

/// Mount the five gateway routes of `resource` ("products", "warehouses")
pub fn proxy_router(resource: &str, proxy: Arc<ResourceProxy>) -> Router {
    Router::new()
        .route(
            &format!("/api/{}", resource),
            get(list_proxy).post(create_proxy),
        )
        .route(
            &format!("/api/{}/:id", resource),
            get(get_proxy).put(update_proxy).delete(delete_proxy),
        )
        .with_state(proxy)
}

/// GET /api/{resource}
pub async fn list_proxy(
    State(proxy): State<Arc<ResourceProxy>>,
) -> Result<BackendResponse, AppError> {
    let url = proxy.routes.list.collection_url();
    proxy.client.send(Method::GET, url, None).await
}

/// GET /api/{resource}/:id
pub async fn get_proxy(
    State(proxy): State<Arc<ResourceProxy>>,
    Path(id): Path<String>,
) -> Result<BackendResponse, AppError> {
    let url = proxy.routes.get.item_url(&id);
    proxy.client.send(Method::GET, url, None).await
}

/// POST /api/{resource}
pub async fn create_proxy(
    State(proxy): State<Arc<ResourceProxy>>,
    body: Bytes,
) -> Result<BackendResponse, AppError> {
    let url = proxy.routes.create.collection_url();
    proxy.client.send(Method::POST, url, Some(body)).await
}

/// PUT /api/{resource}/:id
pub async fn update_proxy(
    State(proxy): State<Arc<ResourceProxy>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<BackendResponse, AppError> {
    let url = proxy.routes.update.item_url(&id);
    proxy.client.send(Method::PUT, url, Some(body)).await
}

/// DELETE /api/{resource}/:id
///
/// Any non-2xx backend status becomes 404. Transport failures still surface as
/// 502/504.
pub async fn delete_proxy(
    State(proxy): State<Arc<ResourceProxy>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let url = proxy.routes.delete.item_url(&id);
    let response = proxy.client.send(Method::DELETE, url, None).await?;

    if response.status.is_success() {
        return Ok(StatusCode::NO_CONTENT);
    }

    if response.status != StatusCode::NOT_FOUND {
        tracing::warn!(
            id = %id,
            backend_status = response.status.as_u16(),
            "Backend delete failed, reporting not found"
        );
    }
    Ok(StatusCode::NOT_FOUND)
}
