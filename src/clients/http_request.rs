//! HTTP request types for the Resource Manager client.
//!
//! This module provides the [`HttpRequest`] type and its builder. Bodies are
//! encoded when the request is built, so an encoding failure surfaces before
//! any I/O happens.

use std::fmt;

use serde::Serialize;

use crate::clients::errors::ArmError;

/// HTTP methods used by the Resource Manager API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for actions such as moving resources.
    Post,
    /// HTTP PUT method for creating or replacing resources.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the equivalent `reqwest` method.
    #[must_use]
    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Patch => write!(f, "PATCH"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

/// An encoded request body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// A textual body sent verbatim without a content type.
    Text(String),
    /// A JSON-encoded body.
    Json(Vec<u8>),
}

impl RequestBody {
    /// Encodes `value` as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Encoding`] if `value` cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, ArmError> {
        serde_json::to_vec(value)
            .map(Self::Json)
            .map_err(ArmError::Encoding)
    }

    /// Encodes an optional value, treating `None` as no body.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Encoding`] if the value cannot be serialized.
    pub fn from_option<T: Serialize + ?Sized>(value: Option<&T>) -> Result<Self, ArmError> {
        value.map_or(Ok(Self::Empty), Self::json)
    }

    /// Wraps text to be sent verbatim.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns the content type this body is sent with, if any.
    #[must_use]
    pub const fn data_type(&self) -> Option<DataType> {
        match self {
            Self::Json(_) => Some(DataType::Json),
            Self::Empty | Self::Text(_) => None,
        }
    }

    /// Returns `true` if there is no body.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the body bytes, if any.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Empty => None,
            Self::Text(text) => Some(text.as_bytes()),
            Self::Json(bytes) => Some(bytes),
        }
    }
}

/// Where a request is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestTarget {
    /// A path appended to the client's base path. Must start with `/` and
    /// carry any query string.
    Path(String),
    /// An absolute URL used verbatim, such as a continuation link.
    Absolute(String),
}

/// A request to be sent to the Resource Manager API.
///
/// # Example
///
/// ```rust
/// use azure_rm::clients::{HttpMethod, HttpRequest, DataType};
/// use serde_json::json;
///
/// let get = HttpRequest::builder(HttpMethod::Get, "/subscriptions/s/resources?api-version=2015-01-01")
///     .build()
///     .unwrap();
/// assert!(get.body.is_empty());
///
/// let put = HttpRequest::builder(HttpMethod::Put, "/subscriptions/s/resourcegroups/rg")
///     .json(&json!({"location": "westus"}))
///     .build()
///     .unwrap();
/// assert_eq!(put.body.data_type(), Some(DataType::Json));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path or absolute URL for this request.
    pub target: RequestTarget,
    /// The encoded request body.
    pub body: RequestBody,
}

impl HttpRequest {
    /// Creates a builder for a request relative to the base path.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, RequestTarget::Path(path.into()))
    }

    /// Creates a builder for a request to an absolute URL.
    #[must_use]
    pub fn absolute(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, RequestTarget::Absolute(url.into()))
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    target: RequestTarget,
    body: Result<RequestBody, ArmError>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, target: RequestTarget) -> Self {
        Self {
            http_method: method,
            target,
            body: Ok(RequestBody::Empty),
        }
    }

    /// Sets an already-encoded body.
    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Ok(body);
        self
    }

    /// Sets a textual body sent verbatim.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.body(RequestBody::text(text))
    }

    /// Encodes `value` as the JSON body. Encoding errors are reported by
    /// [`build`](Self::build).
    #[must_use]
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Self {
        self.body = RequestBody::json(value);
        self
    }

    /// Encodes an optional JSON body; `None` means no body.
    #[must_use]
    pub fn optional_json<T: Serialize + ?Sized>(mut self, value: Option<&T>) -> Self {
        self.body = RequestBody::from_option(value);
        self
    }

    /// Builds the [`HttpRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Encoding`] if the body could not be encoded.
    pub fn build(self) -> Result<HttpRequest, ArmError> {
        Ok(HttpRequest {
            http_method: self.http_method,
            target: self.target,
            body: self.body?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use serde::Serializer;
    use serde_json::json;

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("cannot encode"))
        }
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_builder_without_body() {
        let request = HttpRequest::builder(HttpMethod::Get, "/subscriptions")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.target, RequestTarget::Path("/subscriptions".to_string()));
        assert!(request.body.is_empty());
        assert!(request.body.data_type().is_none());
    }

    #[test]
    fn test_json_body_sets_data_type() {
        let request = HttpRequest::builder(HttpMethod::Put, "/x")
            .json(&json!({"location": "westus"}))
            .build()
            .unwrap();

        assert_eq!(request.body.data_type(), Some(DataType::Json));
        assert_eq!(
            request.body.as_bytes(),
            Some(br#"{"location":"westus"}"#.as_slice())
        );
    }

    #[test]
    fn test_text_body_is_verbatim_without_data_type() {
        let request = HttpRequest::builder(HttpMethod::Post, "/x")
            .text("raw payload")
            .build()
            .unwrap();

        assert!(request.body.data_type().is_none());
        assert_eq!(request.body.as_bytes(), Some(b"raw payload".as_slice()));
    }

    #[test]
    fn test_optional_json_none_is_no_body() {
        let request = HttpRequest::builder(HttpMethod::Post, "/x")
            .optional_json::<serde_json::Value>(None)
            .build()
            .unwrap();

        assert!(request.body.is_empty());
    }

    #[test]
    fn test_encoding_failure_surfaces_at_build() {
        let result = HttpRequest::builder(HttpMethod::Put, "/x")
            .json(&Unencodable)
            .build();

        assert!(matches!(result, Err(ArmError::Encoding(_))));
    }

    #[test]
    fn test_absolute_target() {
        let request = HttpRequest::absolute(
            HttpMethod::Get,
            "https://management.azure.com/subscriptions/s/resources?$skiptoken=abc",
        )
        .build()
        .unwrap();

        assert!(matches!(request.target, RequestTarget::Absolute(_)));
    }

    #[test]
    fn test_data_type_content_type() {
        assert_eq!(DataType::Json.as_content_type(), "application/json");
    }
}
