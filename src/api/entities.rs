//! Entity CRUD handlers
//!
//! Generic over [`Entity`], mounted once per collection service at
//! `/api/{resource}` and `/api/{resource}/:id`.

use crate::error::AppError;
use crate::models::{Entity, EntityId};
use crate::store::EntityStore;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use std::sync::Arc;

/// Shared collection handed to every handler
pub type SharedStore<T> = Arc<EntityStore<T>>;

/// Routes for one entity collection
pub fn entity_router<T: Entity>(store: SharedStore<T>) -> Router {
    Router::new()
        .route(
            &format!("/api/{}", T::RESOURCE),
            get(list_entities::<T>).post(create_entity::<T>),
        )
        .route(
            &format!("/api/{}/:id", T::RESOURCE),
            get(get_entity::<T>)
                .put(update_entity::<T>)
                .delete(delete_entity::<T>),
        )
        .with_state(store)
}

/// GET /api/{resource} - List the whole collection
pub async fn list_entities<T: Entity>(State(store): State<SharedStore<T>>) -> Json<Vec<T>> {
    Json(store.list().await)
}

/// GET /api/{resource}/:id - Get one entity
pub async fn get_entity<T: Entity>(
    State(store): State<SharedStore<T>>,
    Path(id): Path<EntityId>,
) -> Result<Json<T>, AppError> {
    let entity = store.get(&id).await.map_err(|e| {
        tracing::debug!(kind = T::KIND, id = %id, "Entity not found");
        e
    })?;
    Ok(Json(entity))
}

/// POST /api/{resource} - Create an entity with a caller-supplied id
pub async fn create_entity<T: Entity>(
    State(store): State<SharedStore<T>>,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<(StatusCode, Json<T>), AppError> {
    let Json(entity) = payload.map_err(bad_body)?;
    let created = store.create(entity).await?;

    tracing::info!(kind = T::KIND, id = %created.id(), "Entity created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/{resource}/:id - Replace an entity
pub async fn update_entity<T: Entity>(
    State(store): State<SharedStore<T>>,
    Path(id): Path<EntityId>,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<Json<T>, AppError> {
    let Json(entity) = payload.map_err(bad_body)?;
    let updated = store.update(&id, entity).await?;

    tracing::info!(kind = T::KIND, id = %id, new_id = %updated.id(), "Entity updated");
    Ok(Json(updated))
}

/// DELETE /api/{resource}/:id - Delete an entity
pub async fn delete_entity<T: Entity>(
    State(store): State<SharedStore<T>>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, AppError> {
    store.delete(&id).await?;

    tracing::info!(kind = T::KIND, id = %id, "Entity deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn bad_body(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(format!("Invalid body: {}", rejection.body_text()))
}
