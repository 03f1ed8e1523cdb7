//! Credential types.

use std::fmt;

use base64::Engine;
use chrono::{DateTime, Utc};

use crate::config::{AccessToken, SubscriptionId};
use crate::error::ConfigError;

/// An Azure AD bearer token for one subscription.
///
/// Sent as `Authorization: Bearer {token}` on every request.
///
/// # Example
///
/// ```rust
/// use azure_rm::{AccessToken, SubscriptionId, TokenCredentials};
/// use chrono::{Duration, Utc};
///
/// let credentials = TokenCredentials::new(
///     SubscriptionId::new("subscription-a").unwrap(),
///     AccessToken::new("token-a").unwrap(),
/// )
/// .with_expiry(Utc::now() + Duration::hours(1));
///
/// assert!(!credentials.is_expired());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenCredentials {
    /// Subscription every request is scoped to.
    pub subscription_id: SubscriptionId,
    token: AccessToken,
    expires_on: Option<DateTime<Utc>>,
}

impl TokenCredentials {
    /// Creates token credentials with no known expiry.
    #[must_use]
    pub const fn new(subscription_id: SubscriptionId, token: AccessToken) -> Self {
        Self {
            subscription_id,
            token,
            expires_on: None,
        }
    }

    /// Records when the token expires.
    #[must_use]
    pub fn with_expiry(mut self, expires_on: DateTime<Utc>) -> Self {
        self.expires_on = Some(expires_on);
        self
    }

    /// Returns the bearer token.
    #[must_use]
    pub const fn token(&self) -> &AccessToken {
        &self.token
    }

    /// Returns the recorded expiry, if any.
    #[must_use]
    pub const fn expires_on(&self) -> Option<DateTime<Utc>> {
        self.expires_on
    }

    /// Returns `true` if an expiry was recorded and has passed.
    ///
    /// Tokens are not refreshed; an expired token is still sent and the
    /// service answers with 401.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_on.is_some_and(|expires_on| expires_on <= Utc::now())
    }
}

/// A management certificate for one subscription.
///
/// The certificate authenticates at the TLS layer, so no `Authorization`
/// header is sent. Installing it as a client identity is the job of the
/// supplied transport.
#[derive(Clone, PartialEq, Eq)]
pub struct CertificateCredentials {
    /// Subscription every request is scoped to.
    pub subscription_id: SubscriptionId,
    certificate: Vec<u8>,
}

impl CertificateCredentials {
    /// Creates certificate credentials from raw certificate bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCertificate`] if `certificate` is empty.
    pub fn new(subscription_id: SubscriptionId, certificate: Vec<u8>) -> Result<Self, ConfigError> {
        if certificate.is_empty() {
            return Err(ConfigError::EmptyCertificate);
        }
        Ok(Self {
            subscription_id,
            certificate,
        })
    }

    /// Creates certificate credentials from the base64 text found in
    /// publish settings files.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCertificate`] if the text is not valid
    /// base64, or [`ConfigError::EmptyCertificate`] if it decodes to nothing.
    pub fn from_base64(
        subscription_id: SubscriptionId,
        encoded: &str,
    ) -> Result<Self, ConfigError> {
        let certificate = base64::engine::general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(|e| ConfigError::InvalidCertificate {
                reason: e.to_string(),
            })?;
        Self::new(subscription_id, certificate)
    }

    /// Returns the certificate bytes.
    #[must_use]
    pub fn certificate(&self) -> &[u8] {
        &self.certificate
    }
}

impl fmt::Debug for CertificateCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CertificateCredentials")
            .field("subscription_id", &self.subscription_id)
            .field(
                "certificate",
                &format_args!("<{} bytes>", self.certificate.len()),
            )
            .finish()
    }
}

/// The credential a client authenticates with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credential {
    /// Azure AD bearer token.
    Token(TokenCredentials),
    /// Management certificate.
    Certificate(CertificateCredentials),
}

impl Credential {
    /// Returns the subscription requests are scoped to.
    #[must_use]
    pub const fn subscription_id(&self) -> &SubscriptionId {
        match self {
            Self::Token(token) => &token.subscription_id,
            Self::Certificate(certificate) => &certificate.subscription_id,
        }
    }

    /// Returns the bearer token, for token credentials only.
    #[must_use]
    pub const fn bearer_token(&self) -> Option<&AccessToken> {
        match self {
            Self::Token(token) => Some(&token.token),
            Self::Certificate(_) => None,
        }
    }
}

impl From<TokenCredentials> for Credential {
    fn from(credentials: TokenCredentials) -> Self {
        Self::Token(credentials)
    }
}

impl From<CertificateCredentials> for Credential {
    fn from(credentials: CertificateCredentials) -> Self {
        Self::Certificate(credentials)
    }
}
