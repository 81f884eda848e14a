//! Entity collection storage
//!
//! Each collection service owns one [`EntityStore`] and shares it with its
//! handlers through axum state.

pub mod collection;
pub mod error;

pub use collection::EntityStore;
pub use error::StoreError;
