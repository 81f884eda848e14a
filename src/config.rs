//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use crate::gateway::{BackendRoute, ResourceRoutes};
use crate::models::{Entity, Product, Warehouse};
use std::env;

/// Default port of the gateway
pub const GATEWAY_DEFAULT_PORT: u16 = 8080;
/// Default port of the product service
pub const PRODUCT_SERVICE_DEFAULT_PORT: u16 = 7071;
/// Default port of the warehouse service
pub const WAREHOUSE_SERVICE_DEFAULT_PORT: u16 = 7072;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

impl ServerConfig {
    /// Load `HOST` and `PORT` from the environment
    pub fn from_env(default_port: u16) -> Self {
        Self::from_lookup(default_port, |key| env::var(key).ok())
    }

    fn from_lookup(default_port: u16, lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(default_port),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Backend routes of the product service
    pub products: ResourceRoutes,
    /// Backend routes of the warehouse service
    pub warehouses: ResourceRoutes,
    /// Timeout for each outbound call (in seconds)
    pub backend_timeout_secs: u64,
}

impl GatewayConfig {
    /// Load configuration from environment variables with defaults
    ///
    /// # Errors
    /// Returns an error if a configured backend URL is not a valid http(s) URL.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_lookup(GATEWAY_DEFAULT_PORT, &lookup),
            products: resource_routes(
                &lookup,
                "PRODUCT",
                &format!("http://127.0.0.1:{}", PRODUCT_SERVICE_DEFAULT_PORT),
                Product::RESOURCE,
            )?,
            warehouses: resource_routes(
                &lookup,
                "WAREHOUSE",
                &format!("http://127.0.0.1:{}", WAREHOUSE_SERVICE_DEFAULT_PORT),
                Warehouse::RESOURCE,
            )?,
            backend_timeout_secs: lookup("BACKEND_TIMEOUT_SECS")
                .and_then(|t| t.parse().ok())
                .filter(|t| *t > 0)
                .unwrap_or(10),
        })
    }
}

/// Build the five routes of one resource
///
/// `{PREFIX}_SERVICE_URL` sets the base for every verb; `{PREFIX}_{VERB}_URL`
/// overrides the full collection URL of one verb and `{PREFIX}_{VERB}_CODE`
/// sets its access token.
fn resource_routes(
    lookup: &impl Fn(&str) -> Option<String>,
    prefix: &str,
    default_base: &str,
    resource: &str,
) -> anyhow::Result<ResourceRoutes> {
    let base = lookup(&format!("{}_SERVICE_URL", prefix)).unwrap_or_else(|| default_base.to_string());
    let collection_url = format!("{}/api/{}", base.trim_end_matches('/'), resource);

    let route = |verb: &str| -> anyhow::Result<BackendRoute> {
        let url = lookup(&format!("{}_{}_URL", prefix, verb)).unwrap_or_else(|| collection_url.clone());
        let code = lookup(&format!("{}_{}_CODE", prefix, verb));
        BackendRoute::new(&url, code)
    };

    Ok(ResourceRoutes {
        list: route("LIST")?,
        get: route("GET")?,
        create: route("CREATE")?,
        update: route("UPDATE")?,
        delete: route("DELETE")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_gateway_defaults() {
        let config = GatewayConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.server.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.backend_timeout_secs, 10);
        assert_eq!(
            config.products.list.collection_url().as_str(),
            "http://127.0.0.1:7071/api/products"
        );
        assert_eq!(
            config.warehouses.delete.item_url("w1").as_str(),
            "http://127.0.0.1:7072/api/warehouses/w1"
        );
    }

    #[test]
    fn test_per_route_codes_and_overrides() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            ("PRODUCT_SERVICE_URL", "https://products.example.net/"),
            ("PRODUCT_GET_CODE", "get-token"),
            ("PRODUCT_DELETE_CODE", "delete-token"),
            ("WAREHOUSE_CREATE_URL", "https://other.example.net/api/warehouses"),
            ("BACKEND_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(
            config.products.get.item_url("p1").as_str(),
            "https://products.example.net/api/products/p1?code=get-token"
        );
        assert_eq!(
            config.products.delete.item_url("p1").as_str(),
            "https://products.example.net/api/products/p1?code=delete-token"
        );
        assert_eq!(
            config.products.list.collection_url().as_str(),
            "https://products.example.net/api/products"
        );
        assert_eq!(
            config.warehouses.create.collection_url().as_str(),
            "https://other.example.net/api/warehouses"
        );
        assert_eq!(config.backend_timeout_secs, 3);
    }

    #[test]
    fn test_invalid_backend_url_is_an_error() {
        let result =
            GatewayConfig::from_lookup(lookup_from(&[("WAREHOUSE_SERVICE_URL", "nonsense")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let config =
            GatewayConfig::from_lookup(lookup_from(&[("BACKEND_TIMEOUT_SECS", "0")])).unwrap();
        assert_eq!(config.backend_timeout_secs, 10);
    }

    #[test]
    #[serial]
    fn test_server_config_from_env() {
        env::set_var("PORT", "9191");
        env::set_var("HOST", "127.0.0.1");
        let config = ServerConfig::from_env(PRODUCT_SERVICE_DEFAULT_PORT);
        env::remove_var("PORT");
        env::remove_var("HOST");

        assert_eq!(config.server_addr(), "127.0.0.1:9191");
    }

    #[test]
    #[serial]
    fn test_server_config_invalid_port_uses_default() {
        env::set_var("PORT", "not-a-port");
        let config = ServerConfig::from_env(WAREHOUSE_SERVICE_DEFAULT_PORT);
        env::remove_var("PORT");

        assert_eq!(config.port, WAREHOUSE_SERVICE_DEFAULT_PORT);
    }
}
