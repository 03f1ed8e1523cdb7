//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Default Resource Manager endpoint.
pub const DEFAULT_BASE_PATH: &str = "https://management.azure.com/";

/// A validated Azure subscription identifier.
///
/// # Example
///
/// ```rust
/// use azure_rm::SubscriptionId;
///
/// let id = SubscriptionId::new(" 00000000-0000-0000-0000-000000000000 ").unwrap();
/// assert_eq!(id.as_ref(), "00000000-0000-0000-0000-000000000000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(String);

impl SubscriptionId {
    /// Creates a new validated subscription identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySubscriptionId`] if the identifier is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        let id = id.trim();
        if id.is_empty() {
            return Err(ConfigError::EmptySubscriptionId);
        }
        Ok(Self(id.to_string()))
    }
}

impl AsRef<str> for SubscriptionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for SubscriptionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SubscriptionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Azure AD bearer token.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AccessToken(*****)`.
///
/// # Example
///
/// ```rust
/// use azure_rm::AccessToken;
///
/// let token = AccessToken::new("eyJ0eXAi").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated Resource Manager endpoint.
///
/// The URL must be absolute with an `http` or `https` scheme. A trailing
/// slash is accepted and stripped when request URLs are composed.
///
/// # Example
///
/// ```rust
/// use azure_rm::BasePath;
///
/// let base = BasePath::new("https://management.azure.com/").unwrap();
/// assert_eq!(base.trimmed(), "https://management.azure.com");
///
/// // Empty input resolves to the public cloud endpoint
/// let base = BasePath::new("").unwrap();
/// assert_eq!(base.as_ref(), "https://management.azure.com/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    /// Creates a new validated base path, resolving blank input to
    /// [`DEFAULT_BASE_PATH`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBasePath`] if the URL is not absolute
    /// or does not use the `http`/`https` scheme.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim();

        if url.is_empty() {
            return Ok(Self::default());
        }

        let invalid = || ConfigError::InvalidBasePath {
            url: url.to_string(),
        };

        let (scheme, rest) = url.split_once("://").ok_or_else(invalid)?;
        if !scheme.eq_ignore_ascii_case("https") && !scheme.eq_ignore_ascii_case("http") {
            return Err(invalid());
        }

        // Host ends at port, path, query, or end of string
        let host_end = rest.find([':', '/', '?', '#']).unwrap_or(rest.len());
        if host_end == 0 {
            return Err(invalid());
        }

        if rest.contains(['?', '#']) {
            return Err(invalid());
        }

        Ok(Self(url.to_string()))
    }

    /// Returns the URL with trailing slashes removed.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.0.trim_end_matches('/')
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self(DEFAULT_BASE_PATH.to_string())
    }
}

impl AsRef<str> for BasePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
