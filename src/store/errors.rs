//! # Store Errors
//!
//! Failures raised by a document store backend. The route layer decides
//! which HTTP status each one maps to.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Document store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Id could not be parsed into a `BookId`
    #[error("Cast to BookId failed for value \"{0}\" (type string) at path \"_id\" for model \"Book\"")]
    InvalidId(String),

    /// Search pattern failed to compile
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(String),

    /// Backend could not serve the operation
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_id_message_names_value() {
        let err = StoreError::InvalidId("abc".to_string());
        assert!(err.to_string().contains("\"abc\""));
        assert!(err.to_string().contains("_id"));
    }
}
