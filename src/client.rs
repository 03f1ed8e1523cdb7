//! The Resource Manager client.

use crate::auth::Credential;
use crate::clients::HttpClient;
use crate::config::{ClientConfig, SubscriptionId};
use crate::error::ConfigError;
use crate::resources::ResourceOperations;

/// Entry point for Resource Manager operations.
///
/// Holds the immutable configuration and the HTTP client. Share one
/// instance across tasks with `Arc`; calls keep no state on the client.
///
/// # Example
///
/// ```rust
/// use azure_rm::{AccessToken, ClientConfig, ResourceManagementClient, SubscriptionId, TokenCredentials};
///
/// let config = ClientConfig::builder()
///     .token_credentials(TokenCredentials::new(
///         SubscriptionId::new("subscription-a").unwrap(),
///         AccessToken::new("token-a").unwrap(),
///     ))
///     .build()
///     .unwrap();
///
/// let client = ResourceManagementClient::new(config).unwrap();
/// assert_eq!(client.subscription_id().as_ref(), "subscription-a");
/// ```
#[derive(Debug)]
pub struct ResourceManagementClient {
    config: ClientConfig,
    http_client: HttpClient,
}

// Verify ResourceManagementClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceManagementClient>();
};

impl ResourceManagementClient {
    /// Creates a client from a resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the default transport cannot be
    /// created.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        if let Credential::Token(token) = config.credential() {
            if token.is_expired() {
                tracing::warn!(
                    subscription_id = %token.subscription_id,
                    "Configured access token has expired; requests will be rejected"
                );
            }
        }

        let http_client = HttpClient::new(&config)?;
        tracing::debug!(
            base_path = %config.base_path().as_ref(),
            api_version = %config.api_version(),
            "Created Resource Manager client"
        );

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the HTTP client, for requests not covered by typed operations.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the subscription of the active credential.
    #[must_use]
    pub const fn subscription_id(&self) -> &SubscriptionId {
        self.config.credential().subscription_id()
    }

    /// Returns the resource operations.
    #[must_use]
    pub const fn resources(&self) -> ResourceOperations<'_> {
        ResourceOperations::new(self)
    }
}
