//! Warehouse entity

use super::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Warehouse record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Warehouse {
    /// Caller-assigned unique identifier
    #[serde(default)]
    pub id: EntityId,
    /// Display name (required)
    #[serde(default)]
    pub name: String,
    /// Where the warehouse is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Warehouse {
    /// Create a warehouse without a location
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: None,
        }
    }

    /// Set the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl Entity for Warehouse {
    const KIND: &'static str = "warehouse";
    const RESOURCE: &'static str = "warehouses";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warehouse_json_shape() {
        let warehouse: Warehouse =
            serde_json::from_str(r#"{"id":"w1","name":"Main","location":"Madrid"}"#).unwrap();
        assert_eq!(warehouse, Warehouse::new("w1", "Main").with_location("Madrid"));

        let json = serde_json::to_value(Warehouse::new("w2", "Overflow")).unwrap();
        assert_eq!(json, serde_json::json!({"id": "w2", "name": "Overflow"}));
    }

    #[test]
    fn test_warehouse_validate_message() {
        let err = Warehouse::new("w1", "").validate().unwrap_err();
        assert_eq!(err, "warehouse must have an id and a name");
    }
}
