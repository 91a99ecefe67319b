//! Route handlers organized by resource

pub mod posts;

use axum::http::{StatusCode, Uri};

/// Fallback for every unmatched path
pub async fn not_found(uri: Uri) -> StatusCode {
    tracing::debug!(path = %uri.path(), "no route");
    StatusCode::NOT_FOUND
}
