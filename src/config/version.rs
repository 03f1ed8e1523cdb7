//! Resource Manager API version handling.
//!
//! This module provides the [`ApiVersion`] type used for the `api-version`
//! query parameter sent with every Resource Manager request.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Default Resource Manager API version.
pub const DEFAULT_API_VERSION: &str = "2015-01-01";

/// A validated Resource Manager API version.
///
/// Azure API versions are dated (`YYYY-MM-DD`) and may carry a suffix such
/// as `-preview`.
///
/// # Example
///
/// ```rust
/// use azure_rm::ApiVersion;
///
/// let version: ApiVersion = "2016-02-01-preview".parse().unwrap();
/// assert!(version.is_preview());
/// assert_eq!(version.date(), "2016-02-01");
///
/// // Empty input resolves to the default version
/// assert_eq!(ApiVersion::new("").unwrap(), ApiVersion::default());
/// assert_eq!(ApiVersion::default().to_string(), "2015-01-01");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Creates a new validated API version, resolving blank input to
    /// [`DEFAULT_API_VERSION`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the version is not in
    /// `YYYY-MM-DD[-suffix]` format.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        let version = version.trim();

        if version.is_empty() {
            return Ok(Self::default());
        }

        if !Self::is_valid(version) {
            return Err(ConfigError::InvalidApiVersion {
                version: version.to_string(),
            });
        }

        Ok(Self(version.to_string()))
    }

    /// Returns the `YYYY-MM-DD` portion of the version.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.0[..10]
    }

    /// Returns `true` if the version carries a `-preview` suffix.
    #[must_use]
    pub fn is_preview(&self) -> bool {
        self.0[10..].eq_ignore_ascii_case("-preview")
    }

    fn is_valid(version: &str) -> bool {
        let bytes = version.as_bytes();
        if bytes.len() < 10 {
            return false;
        }

        let digits_ok = [0, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit());
        if !digits_ok || bytes[4] != b'-' || bytes[7] != b'-' {
            return false;
        }

        let month: u32 = version[5..7].parse().unwrap_or(0);
        let day: u32 = version[8..10].parse().unwrap_or(0);
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return false;
        }

        match &version[10..] {
            "" => true,
            suffix => {
                suffix.len() > 1
                    && suffix.starts_with('-')
                    && suffix[1..]
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-')
            }
        }
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self(DEFAULT_API_VERSION.to_string())
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
