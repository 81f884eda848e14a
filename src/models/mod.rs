//! Entity models
//!
//! Records held by the collection services. Both entity kinds share the same
//! lifecycle, so the store and handlers are written once against [`Entity`].

pub mod product;
pub mod warehouse;

pub use product::Product;
pub use warehouse::Warehouse;

use serde::{de::DeserializeOwned, Serialize};

/// Caller-assigned identifier of an entity
pub type EntityId = String;

/// A record that can live in an [`EntityStore`](crate::store::EntityStore)
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Singular label used in messages ("product")
    const KIND: &'static str;

    /// Collection path segment under `/api` ("products")
    const RESOURCE: &'static str;

    /// Caller-assigned identifier
    fn id(&self) -> &str;

    /// Display name
    fn name(&self) -> &str;

    /// Check the fields required at creation time
    ///
    /// Returns Ok(()) if valid, Err with message if invalid
    fn validate(&self) -> Result<(), String> {
        if self.id().trim().is_empty() || self.name().trim().is_empty() {
            return Err(format!("{} must have an id and a name", Self::KIND));
        }
        Ok(())
    }
}
