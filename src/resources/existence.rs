//! Existence checks built on `get`.
//!
//! A `get` result is classified into one of three outcomes. A 404 response
//! is the only error that becomes a successful answer; everything else
//! stays an error.

use crate::clients::{ArmError, OperationMetadata};
use crate::resources::response::OperationResult;

/// The answer to "does this resource exist?".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistenceResult {
    /// Whether the resource exists.
    pub exists: bool,
    /// Metadata of the underlying `get` call.
    pub metadata: OperationMetadata,
}

/// Classification of a `get` result for an existence check.
#[derive(Debug)]
pub enum ExistenceOutcome {
    /// The resource was returned.
    Exists(OperationMetadata),
    /// The service answered 404.
    NotFound(OperationMetadata),
    /// Any other failure; existence is unknown.
    Failed(ArmError),
}

impl ExistenceOutcome {
    /// Classifies the result of a `get` call.
    #[must_use]
    pub fn classify<T>(result: Result<OperationResult<T>, ArmError>) -> Self {
        match result {
            Ok(found) => Self::Exists(found.into_parts().1),
            Err(ArmError::Response(e)) if e.is_not_found() => Self::NotFound(e.metadata),
            Err(e) => Self::Failed(e),
        }
    }

    /// Returns the answer if one was determined.
    #[must_use]
    pub const fn exists(&self) -> Option<bool> {
        match self {
            Self::Exists(_) => Some(true),
            Self::NotFound(_) => Some(false),
            Self::Failed(_) => None,
        }
    }

    /// Converts the outcome into the result returned to callers.
    ///
    /// # Errors
    ///
    /// Returns the original error for [`ExistenceOutcome::Failed`].
    pub fn into_result(self) -> Result<ExistenceResult, ArmError> {
        match self {
            Self::Exists(metadata) => Ok(ExistenceResult {
                exists: true,
                metadata,
            }),
            Self::NotFound(metadata) => Ok(ExistenceResult {
                exists: false,
                metadata,
            }),
            Self::Failed(e) => Err(e),
        }
    }
}
