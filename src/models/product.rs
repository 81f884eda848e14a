//! Product entity

use super::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Product record
///
/// `id` and `name` default to empty strings when missing from a request body so
/// that the create validation, not the JSON extractor, reports them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Caller-assigned unique identifier
    #[serde(default)]
    pub id: EntityId,
    /// Display name (required)
    #[serde(default)]
    pub name: String,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price
    #[serde(default)]
    pub price: f64,
}

impl Product {
    /// Create a product without a description
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Entity for Product {
    const KIND: &'static str = "product";
    const RESOURCE: &'static str = "products";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
