//! In-memory entity collection
//!
//! Insertion-ordered list guarded by a single reader-writer lock. Lookups are
//! linear scans; every mutation runs its checks and its write under the same
//! write guard, so two concurrent creates with one id cannot both succeed.

use super::StoreError;
use crate::models::Entity;
use tokio::sync::RwLock;

/// Process-local collection of one entity kind
#[derive(Debug)]
pub struct EntityStore<T: Entity> {
    entities: RwLock<Vec<T>>,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with `entities`, in order
    ///
    /// Later entries whose id is already present are dropped.
    pub fn with_entities(entities: impl IntoIterator<Item = T>) -> Self {
        let mut unique: Vec<T> = Vec::new();
        for entity in entities {
            if !unique.iter().any(|e| e.id() == entity.id()) {
                unique.push(entity);
            }
        }
        Self {
            entities: RwLock::new(unique),
        }
    }

    /// Snapshot of the whole collection in insertion order
    pub async fn list(&self) -> Vec<T> {
        self.entities.read().await.clone()
    }

    /// Number of stored entities
    pub async fn len(&self) -> usize {
        self.entities.read().await.len()
    }

    /// Whether the collection is empty
    pub async fn is_empty(&self) -> bool {
        self.entities.read().await.is_empty()
    }

    /// Find the entity with the given id
    pub async fn get(&self, id: &str) -> Result<T, StoreError> {
        self.entities
            .read()
            .await
            .iter()
            .find(|e| e.id() == id)
            .cloned()
            .ok_or_else(|| not_found::<T>(id))
    }

    /// Append a new entity
    ///
    /// # Errors
    /// * `StoreError::Invalid` - id or name is blank
    /// * `StoreError::AlreadyExists` - the id is already stored
    pub async fn create(&self, entity: T) -> Result<T, StoreError> {
        entity.validate().map_err(StoreError::Invalid)?;

        let mut entities = self.entities.write().await;
        if entities.iter().any(|e| e.id() == entity.id()) {
            return Err(StoreError::AlreadyExists {
                kind: T::KIND,
                id: entity.id().to_string(),
            });
        }

        entities.push(entity.clone());
        Ok(entity)
    }

    /// Replace the entity stored under `id` with `entity`, verbatim
    ///
    /// The replacement may carry a different id than `id`, but not the id of
    /// another stored entity.
    ///
    /// # Errors
    /// * `StoreError::NotFound` - nothing is stored under `id`
    /// * `StoreError::AlreadyExists` - the replacement's id belongs to another entity
    pub async fn update(&self, id: &str, entity: T) -> Result<T, StoreError> {
        let mut entities = self.entities.write().await;
        let index = entities
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| not_found::<T>(id))?;

        if entity.id() != id && entities.iter().any(|e| e.id() == entity.id()) {
            return Err(StoreError::AlreadyExists {
                kind: T::KIND,
                id: entity.id().to_string(),
            });
        }

        entities[index] = entity.clone();
        Ok(entity)
    }

    /// Remove the entity stored under `id`
    pub async fn delete(&self, id: &str) -> Result<T, StoreError> {
        let mut entities = self.entities.write().await;
        let index = entities
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| not_found::<T>(id))?;
        Ok(entities.remove(index))
    }
}

fn not_found<T: Entity>(id: &str) -> StoreError {
    StoreError::NotFound {
        kind: T::KIND,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Product, Warehouse};
    use std::sync::Arc;

    fn widget() -> Product {
        Product::new("p1", "Widget", 9.99)
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = EntityStore::new();
        let created = store.create(widget()).await.unwrap();
        assert_eq!(created, widget());
        assert_eq!(store.get("p1").await.unwrap(), widget());
    }

    #[tokio::test]
    async fn test_create_duplicate_leaves_collection_unchanged() {
        let store = EntityStore::with_entities([widget()]);
        let result = store.create(Product::new("p1", "Other", 1.0)).await;
        assert_eq!(
            result.unwrap_err(),
            StoreError::AlreadyExists {
                kind: "product",
                id: "p1".to_string()
            }
        );
        assert_eq!(store.list().await, vec![widget()]);
    }

    #[tokio::test]
    async fn test_create_blank_fields_rejected() {
        let store: EntityStore<Warehouse> = EntityStore::new();
        assert!(matches!(
            store.create(Warehouse::new("", "Main")).await,
            Err(StoreError::Invalid(_))
        ));
        assert!(matches!(
            store.create(Warehouse::new("w1", "")).await,
            Err(StoreError::Invalid(_))
        ));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = EntityStore::new();
        for id in ["c", "a", "b"] {
            store.create(Warehouse::new(id, "W")).await.unwrap();
        }
        let ids: Vec<String> = store.list().await.into_iter().map(|w| w.id).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_update_replaces_verbatim() {
        let store = EntityStore::with_entities([widget(), Product::new("p2", "Gadget", 2.0)]);
        let replacement = Product::new("p9", "Renamed", 5.0).with_description("new");
        let updated = store.update("p1", replacement.clone()).await.unwrap();
        assert_eq!(updated, replacement);
        assert!(store.get("p1").await.is_err());
        assert_eq!(store.get("p9").await.unwrap(), replacement);
        // position is preserved
        assert_eq!(store.list().await[0], replacement);
    }

    #[tokio::test]
    async fn test_update_missing_id() {
        let store = EntityStore::with_entities([widget()]);
        let result = store.update("nope", Product::new("nope", "X", 1.0)).await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
        assert_eq!(store.list().await, vec![widget()]);
    }

    #[tokio::test]
    async fn test_update_cannot_take_another_entitys_id() {
        let gadget = Product::new("p2", "Gadget", 2.0);
        let store = EntityStore::with_entities([widget(), gadget.clone()]);
        let result = store.update("p1", Product::new("p2", "Clash", 1.0)).await;
        assert!(matches!(result, Err(StoreError::AlreadyExists { .. })));
        assert_eq!(store.list().await, vec![widget(), gadget]);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = EntityStore::with_entities([widget()]);
        assert_eq!(store.delete("p1").await.unwrap(), widget());
        assert!(store.is_empty().await);
        assert!(matches!(
            store.delete("p1").await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_with_entities_drops_duplicates() {
        let store = EntityStore::with_entities([widget(), Product::new("p1", "Dup", 0.0)]);
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("p1").await.unwrap().name, "Widget");
    }

    #[tokio::test]
    async fn test_concurrent_creates_with_same_id() {
        let store = Arc::new(EntityStore::new());
        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create(Product::new("same", format!("P{}", i), 1.0))
                    .await
                    .is_ok()
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(store.len().await, 1);
    }
}
