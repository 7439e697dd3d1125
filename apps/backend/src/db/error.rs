//! Record store error types.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("record {id} changed concurrently: expected version {expected}, found {found}")]
    Conflict { id: Uuid, expected: u64, found: u64 },

    #[error("record already exists: {0}")]
    Duplicate(Uuid),
}

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
