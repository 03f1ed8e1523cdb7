//! Operation results that carry per-call metadata.

use std::ops::{Deref, DerefMut};

use crate::clients::OperationMetadata;

/// A decoded value together with the metadata of the call that produced it.
///
/// Derefs to the value, so fields can be read directly.
///
/// # Example
///
/// ```rust
/// use azure_rm::clients::OperationMetadata;
/// use azure_rm::{OperationResult, ResourceListResult};
///
/// let result = OperationResult::new(
///     ResourceListResult::default(),
///     OperationMetadata { status_code: 200, ..OperationMetadata::default() },
/// );
///
/// assert!(!result.has_next_page());
/// assert_eq!(result.metadata().status_code, 200);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResult<T> {
    value: T,
    metadata: OperationMetadata,
}

impl<T> OperationResult<T> {
    /// Wraps `value` with its call metadata.
    #[must_use]
    pub const fn new(value: T, metadata: OperationMetadata) -> Self {
        Self { value, metadata }
    }

    /// Returns the decoded value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the metadata of the call.
    #[must_use]
    pub const fn metadata(&self) -> &OperationMetadata {
        &self.metadata
    }

    /// Consumes the result and returns the value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Consumes the result and returns both parts.
    #[must_use]
    pub fn into_parts(self) -> (T, OperationMetadata) {
        (self.value, self.metadata)
    }

    /// Maps the value, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> OperationResult<U>
    where
        F: FnOnce(T) -> U,
    {
        OperationResult {
            value: f(self.value),
            metadata: self.metadata,
        }
    }
}

impl<T> From<(T, OperationMetadata)> for OperationResult<T> {
    fn from((value, metadata): (T, OperationMetadata)) -> Self {
        Self::new(value, metadata)
    }
}

impl<T> Deref for OperationResult<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> DerefMut for OperationResult<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deref_and_parts() {
        let metadata = OperationMetadata {
            status_code: 201,
            request_id: Some("req-1".to_string()),
            ..OperationMetadata::default()
        };
        let mut result = OperationResult::new(vec![1, 2], metadata.clone());

        assert_eq!(result.len(), 2);
        result.push(3);

        let (value, parts_metadata) = result.into_parts();
        assert_eq!(value, vec![1, 2, 3]);
        assert_eq!(parts_metadata, metadata);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let result = OperationResult::from((
            "abc".to_string(),
            OperationMetadata {
                status_code: 200,
                ..OperationMetadata::default()
            },
        ));
        let mapped = result.map(|s| s.len());

        assert_eq!(*mapped, 3);
        assert_eq!(mapped.metadata().status_code, 200);
    }
}
