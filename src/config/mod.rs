//! Configuration types for the Resource Manager client.
//!
//! This module provides the configuration a [`ResourceManagementClient`]
//! is constructed from.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClientConfig`]: The resolved, immutable client configuration
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`BasePath`]: A validated management endpoint URL
//! - [`ApiVersion`]: The Resource Manager API version to use
//! - [`SubscriptionId`] and [`AccessToken`]: Validated credential values
//!
//! # Example
//!
//! ```rust
//! use azure_rm::{AccessToken, ClientConfig, SubscriptionId, TokenCredentials};
//!
//! let config = ClientConfig::builder()
//!     .token_credentials(TokenCredentials::new(
//!         SubscriptionId::new("subscription-a").unwrap(),
//!         AccessToken::new("token-a").unwrap(),
//!     ))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_path().as_ref(), "https://management.azure.com/");
//! assert_eq!(config.api_version().as_ref(), "2015-01-01");
//! ```
//!
//! [`ResourceManagementClient`]: crate::ResourceManagementClient

mod newtypes;
mod version;

pub use newtypes::{AccessToken, BasePath, SubscriptionId, DEFAULT_BASE_PATH};
pub use version::{ApiVersion, DEFAULT_API_VERSION};

use crate::auth::{CertificateCredentials, Credential, TokenCredentials};
use crate::error::ConfigError;

/// Configuration for a Resource Manager client.
///
/// Immutable once built. All fields are resolved: blank base paths and API
/// versions have already been replaced by their defaults.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_path: BasePath,
    api_version: ApiVersion,
    credential: Credential,
    http_client: Option<reqwest::Client>,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the management endpoint.
    #[must_use]
    pub const fn base_path(&self) -> &BasePath {
        &self.base_path
    }

    /// Returns the API version used by subscription-level operations.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the active credential.
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Returns the caller-supplied HTTP transport, if any.
    #[must_use]
    pub const fn http_client(&self) -> Option<&reqwest::Client> {
        self.http_client.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// Exactly one credential is required. All other fields have defaults.
///
/// # Defaults
///
/// - `base_path`: `https://management.azure.com/` (also used for blank input)
/// - `api_version`: `2015-01-01` (also used for blank input)
/// - `http_client`: a rustls-backed `reqwest::Client`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_path: Option<String>,
    api_version: Option<String>,
    token_credentials: Option<TokenCredentials>,
    certificate_credentials: Option<CertificateCredentials>,
    http_client: Option<reqwest::Client>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the management endpoint. Blank input selects the default.
    #[must_use]
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    /// Sets the API version. Blank input selects the default.
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Authenticates with an Azure AD bearer token.
    #[must_use]
    pub fn token_credentials(mut self, credentials: TokenCredentials) -> Self {
        self.token_credentials = Some(credentials);
        self
    }

    /// Authenticates with a management certificate.
    #[must_use]
    pub fn certificate_credentials(mut self, credentials: CertificateCredentials) -> Self {
        self.certificate_credentials = Some(credentials);
        self
    }

    /// Sets the credential from an already-chosen [`Credential`].
    #[must_use]
    pub fn credential(self, credential: Credential) -> Self {
        match credential {
            Credential::Token(token) => self.token_credentials(token),
            Credential::Certificate(certificate) => self.certificate_credentials(certificate),
        }
    }

    /// Supplies the HTTP transport used to execute requests.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`], resolving defaults and validating fields.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingRequiredField`] if no credential was supplied
    /// - [`ConfigError::ConflictingCredentials`] if both credential kinds were supplied
    /// - [`ConfigError::InvalidBasePath`] or [`ConfigError::InvalidApiVersion`]
    ///   for malformed non-blank values
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let credential = match (self.token_credentials, self.certificate_credentials) {
            (Some(token), None) => Credential::Token(token),
            (None, Some(certificate)) => Credential::Certificate(certificate),
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingCredentials),
            (None, None) => {
                return Err(ConfigError::MissingRequiredField {
                    field: "credential",
                })
            }
        };

        let base_path = self
            .base_path
            .map_or_else(|| Ok(BasePath::default()), BasePath::new)?;
        let api_version = self
            .api_version
            .map_or_else(|| Ok(ApiVersion::default()), ApiVersion::new)?;

        Ok(ClientConfig {
            base_path,
            api_version,
            credential,
            http_client: self.http_client,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> TokenCredentials {
        TokenCredentials::new(
            SubscriptionId::new("subscription-a").unwrap(),
            AccessToken::new("token-a").unwrap(),
        )
    }

    fn certificate() -> CertificateCredentials {
        CertificateCredentials::new(SubscriptionId::new("subscription-b").unwrap(), vec![1])
            .unwrap()
    }

    #[test]
    fn test_defaults_applied_when_unset() {
        let config = ClientConfig::builder()
            .token_credentials(token())
            .build()
            .unwrap();

        assert_eq!(config.base_path().as_ref(), DEFAULT_BASE_PATH);
        assert_eq!(config.api_version().as_ref(), DEFAULT_API_VERSION);
        assert!(config.http_client().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_defaults_applied_when_blank() {
        let config = ClientConfig::builder()
            .base_path("")
            .api_version("")
            .token_credentials(token())
            .build()
            .unwrap();

        assert_eq!(config.base_path().as_ref(), "https://management.azure.com/");
        assert_eq!(config.api_version().as_ref(), "2015-01-01");
    }

    #[test]
    fn test_explicit_values_are_kept() {
        let config = ClientConfig::builder()
            .base_path("https://management.chinacloudapi.cn/")
            .api_version("2016-02-01")
            .certificate_credentials(certificate())
            .user_agent_prefix("MyTool/1.0")
            .build()
            .unwrap();

        assert_eq!(
            config.base_path().as_ref(),
            "https://management.chinacloudapi.cn/"
        );
        assert_eq!(config.api_version().as_ref(), "2016-02-01");
        assert_eq!(config.user_agent_prefix(), Some("MyTool/1.0"));
        assert!(matches!(config.credential(), Credential::Certificate(_)));
    }

    #[test]
    fn test_missing_credential_is_rejected() {
        let result = ClientConfig::builder().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "credential"
            })
        ));
    }

    #[test]
    fn test_both_credentials_are_rejected() {
        let result = ClientConfig::builder()
            .token_credentials(token())
            .certificate_credentials(certificate())
            .build();
        assert!(matches!(result, Err(ConfigError::ConflictingCredentials)));
    }

    #[test]
    fn test_credential_setter_routes_by_kind() {
        let config = ClientConfig::builder()
            .credential(Credential::Token(token()))
            .build()
            .unwrap();
        assert_eq!(
            config.credential().subscription_id().as_ref(),
            "subscription-a"
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let result = ClientConfig::builder()
            .base_path("not-a-url")
            .token_credentials(token())
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidBasePath { .. })));

        let result = ClientConfig::builder()
            .api_version("latest")
            .token_credentials(token())
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidApiVersion { .. })));
    }
}
