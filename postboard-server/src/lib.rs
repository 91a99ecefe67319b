//! postboard-server: HTTP surface for the post registry
//!
//! Exposes the registry through `/posts.*` endpoints that take their
//! parameters from the query string and answer with JSON.

pub mod http;
pub mod validation;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use validation::ValidationError;
