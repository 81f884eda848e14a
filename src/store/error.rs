//! Store-specific error types
//!
//! Errors returned by [`EntityStore`](super::EntityStore) operations.

use thiserror::Error;

/// Errors that can occur while mutating or querying a collection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Entity failed validation (blank id or name)
    #[error("{0}")]
    Invalid(String),

    /// An entity with the same identifier is already stored
    #[error("{kind} with id {id} already exists")]
    AlreadyExists {
        /// Entity kind label
        kind: &'static str,
        /// Conflicting identifier
        id: String,
    },

    /// No entity with the given identifier
    #[error("{kind} not found for id {id}")]
    NotFound {
        /// Entity kind label
        kind: &'static str,
        /// Requested identifier
        id: String,
    },
}
