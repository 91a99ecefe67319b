//! postboard-core: the post registry
//!
//! Owns the newest-first collection of posts and the id counter, and
//! enforces the live/removed lifecycle. Nothing in here touches I/O.

pub mod error;
pub mod post;
pub mod registry;

pub use error::{RegistryError, RegistryResult};
pub use post::{Post, PostId};
pub use registry::PostRegistry;
