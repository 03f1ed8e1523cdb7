//! Error types for client configuration.
//!
//! This module contains the error type returned while building a
//! [`ClientConfig`](crate::ClientConfig) or its validated newtypes.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` so that an
//! invalid client is rejected before any request is made. Errors raised while
//! talking to the service live in [`crate::clients::ArmError`].
//!
//! # Example
//!
//! ```rust
//! use azure_rm::{ConfigError, SubscriptionId};
//!
//! let result = SubscriptionId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptySubscriptionId)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a Resource Manager client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Subscription identifier cannot be empty.
    #[error("Subscription ID cannot be empty. Please provide the Azure subscription to operate on.")]
    EmptySubscriptionId,

    /// Bearer token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Azure AD bearer token.")]
    EmptyAccessToken,

    /// Management certificate cannot be empty.
    #[error("Certificate cannot be empty. Please provide the management certificate bytes.")]
    EmptyCertificate,

    /// Management certificate is not valid base64.
    #[error("Invalid certificate encoding: {reason}")]
    InvalidCertificate {
        /// Why decoding failed.
        reason: String,
    },

    /// Base path is not an absolute http(s) URL.
    #[error("Invalid base path '{url}'. Expected an absolute URL such as 'https://management.azure.com/'.")]
    InvalidBasePath {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is not in the dated format.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM-DD' optionally followed by a suffix (e.g., '2015-01-01' or '2016-02-01-preview').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Both a token and a certificate credential were supplied.
    #[error("Both token and certificate credentials were supplied. Configure exactly one credential kind.")]
    ConflictingCredentials,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The underlying HTTP transport could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClient {
        /// The transport error message.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_subscription_id_error_message() {
        let message = ConfigError::EmptySubscriptionId.to_string();
        assert!(message.contains("Subscription ID cannot be empty"));
    }

    #[test]
    fn test_invalid_base_path_error_message() {
        let error = ConfigError::InvalidBasePath {
            url: "management.azure.com".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("management.azure.com"));
        assert!(message.contains("absolute URL"));
    }

    #[test]
    fn test_missing_credential_error_message() {
        let error = ConfigError::MissingRequiredField { field: "credential" };
        let message = error.to_string();
        assert!(message.contains("credential"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_conflicting_credentials_error_message() {
        let message = ConfigError::ConflictingCredentials.to_string();
        assert!(message.contains("exactly one"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAccessToken;
        let _: &dyn std::error::Error = &error;
    }
}
