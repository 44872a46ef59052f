//! Storage error types.

use std::fmt::Display;

/// Errors surfaced by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No record exists under the requested key.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },
}

impl StoreError {
    /// Create a not-found error for `entity` keyed by `id`.
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
