/// Structured error types for registry operations.
///
/// Every failure leaves the registry untouched. Callers map
/// [`RegistryError::is_validation`] failures to "bad request" and the rest
/// to "not found".
use thiserror::Error;

use crate::post::PostId;

pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No post eligible for the operation carries this id
    #[error("post {id} not found")]
    NotFound { id: PostId },

    /// Restore was asked for a post that is still live
    #[error("post {id} is not removed")]
    NotRemoved { id: PostId },
}

impl RegistryError {
    /// Whether the failure is a rejected request rather than a missing post.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::NotRemoved { .. })
    }

    /// The post id the failed operation was aimed at
    pub fn id(&self) -> PostId {
        match self {
            Self::NotFound { id } | Self::NotRemoved { id } => *id,
        }
    }
}
