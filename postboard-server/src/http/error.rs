//! API error type with IntoResponse
//!
//! Failures render as a bare status code: no body, no content type.
//! The reason only goes to the debug log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use postboard_core::RegistryError;

use crate::validation::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Validation(e) => tracing::debug!(%status, "rejected request: {}", e),
            Self::NotFound { resource, id } => {
                tracing::debug!(%status, "{} '{}' not found", resource, id)
            }
        }

        status.into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<RegistryError> for ApiError {
    fn from(e: RegistryError) -> Self {
        if e.is_validation() {
            Self::Validation(ValidationError::InvalidState {
                field: "id",
                reason: "post is not removed",
            })
        } else {
            Self::NotFound {
                resource: "post",
                id: e.id().to_string(),
            }
        }
    }
}
