//! Validation error types

use thiserror::Error;

/// Rejected request input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required query parameter absent
    #[error("{field} is required")]
    Missing { field: &'static str },

    /// Parameter present but not of the expected shape
    #[error("{field}: {reason}")]
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Query string could not be decoded at all
    #[error("malformed query string: {reason}")]
    MalformedQuery { reason: String },

    /// Target exists but is in the wrong state for the operation
    #[error("{field}: {reason}")]
    InvalidState { field: &'static str, reason: &'static str },
}
