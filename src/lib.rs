//! Inventory BFF
//!
//! A backend-for-frontend gateway in front of two in-memory collection
//! services (products and warehouses). The binaries in `src/main.rs` and
//! `src/bin/` are thin wrappers around the routers built here.

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod server;
/// In-memory entity collections
pub mod store;
