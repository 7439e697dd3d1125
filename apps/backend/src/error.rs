//! Error handling for the backend services

use studyquest_core::{CoreError, PayloadError};
use thiserror::Error;

use crate::db::StoreError;

/// Service error types
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Invalid payload: {0}")]
    Payload(#[from] PayloadError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => ServiceError::NotFound(what),
            StoreError::Conflict { .. } => ServiceError::Conflict(err.to_string()),
            StoreError::Duplicate(_) => ServiceError::Store(err.to_string()),
        }
    }
}

impl ServiceError {
    /// Stable identifier for callers that map errors onto their own surface.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Core(_) => "invalid_argument",
            ServiceError::Payload(_) => "invalid_payload",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Conflict(_) => "conflict",
            ServiceError::Store(_) => "store_error",
        }
    }
}

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use studyquest_core::InvalidArgument;
    use uuid::Uuid;

    #[test]
    fn test_core_error_kind() {
        let error = ServiceError::from(CoreError::from(InvalidArgument::EmptyQuiz));
        assert_eq!(error.kind(), "invalid_argument");
    }

    #[test]
    fn test_store_not_found_maps_to_not_found() {
        let error = ServiceError::from(StoreError::NotFound("card 7".to_string()));
        assert_eq!(error.kind(), "not_found");
        assert_eq!(error.to_string(), "Not found: card 7");
    }

    #[test]
    fn test_store_conflict_maps_to_conflict() {
        let id = Uuid::nil();
        let error = ServiceError::from(StoreError::Conflict {
            id,
            expected: 1,
            found: 2,
        });
        assert_eq!(error.kind(), "conflict");
        assert!(error.to_string().starts_with("Conflict:"));
    }

    #[test]
    fn test_duplicate_maps_to_store_error() {
        let error = ServiceError::from(StoreError::Duplicate(Uuid::nil()));
        assert_eq!(error.kind(), "store_error");
    }

    #[test]
    fn test_error_display_core() {
        let error = ServiceError::from(CoreError::from(InvalidArgument::Difficulty(6)));
        assert_eq!(
            error.to_string(),
            "invalid argument: difficulty must be between 1 and 5, got 6"
        );
    }
}
