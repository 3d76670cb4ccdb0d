//! Custom error types for Bistro
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Bistro operations
#[derive(Error, Debug)]
pub enum BistroError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Out-of-range container access
    #[error("Index {index} out of range for length {len}")]
    Index { index: usize, len: usize },

    /// Pop/dequeue/peek on an empty container
    #[error("{0} is empty")]
    EmptyContainer(&'static str),

    /// Malformed persisted record
    #[error("Failed to parse '{line}': {reason}")]
    Parse { line: String, reason: String },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BistroError {
    /// Create a "not found" error for menu items
    pub fn menu_item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Menu item",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for orders
    pub fn order_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Order",
            identifier: identifier.into(),
        }
    }

    /// Create a parse error for a persisted line
    pub fn parse(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an empty container error
    pub fn is_empty_container(&self) -> bool {
        matches!(self, Self::EmptyContainer(_))
    }

    /// Check if this is an out-of-range error
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index { .. })
    }
}

impl From<std::io::Error> for BistroError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BistroError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Bistro operations
pub type BistroResult<T> = Result<T, BistroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BistroError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = BistroError::menu_item_not_found("7");
        assert_eq!(err.to_string(), "Menu item not found: 7");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_index_error() {
        let err = BistroError::Index { index: 5, len: 2 };
        assert_eq!(err.to_string(), "Index 5 out of range for length 2");
        assert!(err.is_index());
    }

    #[test]
    fn test_empty_container_error() {
        let err = BistroError::EmptyContainer("Queue");
        assert_eq!(err.to_string(), "Queue is empty");
        assert!(err.is_empty_container());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let bistro_err: BistroError = io_err.into();
        assert!(matches!(bistro_err, BistroError::Io(_)));
    }
}
