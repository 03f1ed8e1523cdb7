//! Error types for Resource Manager HTTP operations.
//!
//! # Error Handling
//!
//! Every operation returns [`ArmError`], whose variants form a closed taxonomy:
//!
//! - [`ArmError::Encoding`]: The request body could not be marshaled. No request was sent.
//! - [`ArmError::Transport`]: No response was obtained (connection, DNS, TLS failures).
//! - [`ArmError::Response`]: A non-2xx response, carried as [`HttpResponseError`].
//! - [`ArmError::Decoding`]: A 2xx response whose body did not match the expected shape.
//!
//! Nothing is retried. The only place an error is turned into a successful
//! result is the existence check, which treats a 404 as "does not exist".
//!
//! # Example
//!
//! ```rust,ignore
//! use azure_rm::clients::ArmError;
//!
//! match client.resources().get("my-group", &identity).await {
//!     Ok(result) => println!("Found {}", result.value.id),
//!     Err(ArmError::Response(e)) => {
//!         println!("API error {}: {:?}", e.code, e.body.error_message());
//!         println!("Request id: {:?}", e.metadata.request_id);
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use std::fmt;

use thiserror::Error;

use crate::clients::http_response::OperationMetadata;

/// Body of a non-2xx response.
///
/// JSON bodies are decoded into an untyped value; any other content type is
/// kept as raw text.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorBody {
    /// A decoded JSON payload.
    Json(serde_json::Value),
    /// The raw response text.
    Text(String),
}

impl ErrorBody {
    /// Returns the `error.code` field of an ARM error envelope, if present.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.envelope_field("code")
    }

    /// Returns the `error.message` field of an ARM error envelope, if present.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.envelope_field("message")
    }

    fn envelope_field(&self, field: &str) -> Option<&str> {
        match self {
            Self::Json(value) => value.get("error")?.get(field)?.as_str(),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Failure to read or parse the body of a non-2xx response.
#[derive(Debug, Error)]
pub enum ResponseBodyError {
    /// The body could not be read from the connection.
    #[error("failed to read response body: {0}")]
    Read(#[from] reqwest::Error),

    /// The body was labeled JSON but did not parse.
    #[error("failed to parse JSON error body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Error returned when a request receives a non-successful response.
///
/// The status code, body and operation metadata are always populated.
///
/// # Example
///
/// ```rust
/// use azure_rm::clients::{ErrorBody, HttpResponseError, OperationMetadata};
///
/// let error = HttpResponseError {
///     code: 404,
///     body: ErrorBody::Text("Not Found".to_string()),
///     metadata: OperationMetadata {
///         status_code: 404,
///         ..OperationMetadata::default()
///     },
///     cause: None,
/// };
///
/// assert!(error.is_not_found());
/// assert_eq!(error.to_string(), "Status Code: 404 Body: Not Found");
/// ```
#[derive(Debug, Error)]
#[error("Status Code: {code} Body: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The decoded JSON or raw text body.
    pub body: ErrorBody,
    /// Metadata extracted from the response headers.
    pub metadata: OperationMetadata,
    /// Why the body could not be decoded, if it could not.
    #[source]
    pub cause: Option<ResponseBodyError>,
}

impl HttpResponseError {
    /// Returns `true` if the service reported that the resource does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.code == 404
    }
}

/// Unified error type for Resource Manager operations.
#[derive(Debug, Error)]
pub enum ArmError {
    /// The request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The request could not be delivered or no response was received.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service returned a non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// A successful response body did not match the expected shape.
    #[error("Failed to decode response body (status {}): {source}", .metadata.status_code)]
    Decoding {
        /// Metadata of the response that failed to decode.
        metadata: OperationMetadata,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl ArmError {
    /// Returns the response metadata, when a response was obtained.
    #[must_use]
    pub const fn metadata(&self) -> Option<&OperationMetadata> {
        match self {
            Self::Response(e) => Some(&e.metadata),
            Self::Decoding { metadata, .. } => Some(metadata),
            Self::Encoding(_) | Self::Transport(_) => None,
        }
    }

    /// Returns the HTTP status code for [`ArmError::Response`] errors.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
