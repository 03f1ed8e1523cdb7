//! HTTP client for Resource Manager communication.
//!
//! This module provides the [`HttpClient`] type, which turns an
//! [`HttpRequest`] into a transport request, executes it, and classifies the
//! response.

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;

use crate::clients::errors::{ArmError, ErrorBody, HttpResponseError, ResponseBodyError};
use crate::clients::http_request::{HttpRequest, RequestTarget};
use crate::clients::http_response::{HttpResponse, OperationMetadata};
use crate::config::{BasePath, ClientConfig};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP client for making requests to the Resource Manager API.
///
/// The client handles:
/// - URL composition from the configured base path
/// - Default headers including `Accept`, `User-Agent` and the bearer token
/// - Metadata extraction from every response
/// - Classification of non-2xx responses into [`HttpResponseError`]
///
/// Requests are never retried.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and holds no per-call state, so one
/// instance can serve concurrent callers.
pub struct HttpClient {
    /// The transport.
    client: reqwest::Client,
    /// Management endpoint.
    base_path: BasePath,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if no transport was supplied and
    /// the default one cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Azure RM Rust Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), JSON_CONTENT_TYPE.to_string());

        // Certificate credentials authenticate at the TLS layer
        if let Some(token) = config.credential().bearer_token() {
            default_headers.insert(
                "Authorization".to_string(),
                format!("Bearer {}", token.as_ref()),
            );
        }

        let client = match config.http_client() {
            Some(client) => client.clone(),
            None => reqwest::Client::builder()
                .use_rustls_tls()
                .build()
                .map_err(|e| ConfigError::HttpClient {
                    reason: e.to_string(),
                })?,
        };

        Ok(Self {
            client,
            base_path: config.base_path().clone(),
            default_headers,
        })
    }

    /// Returns the management endpoint for this client.
    #[must_use]
    pub const fn base_path(&self) -> &BasePath {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the URL `request` is sent to.
    ///
    /// Paths are appended to the base path with its trailing slash trimmed;
    /// absolute targets are used verbatim.
    #[must_use]
    pub fn request_url(&self, request: &HttpRequest) -> String {
        match &request.target {
            RequestTarget::Path(path) => format!("{}{}", self.base_path.trimmed(), path),
            RequestTarget::Absolute(url) => url.clone(),
        }
    }

    /// Returns the headers `request` is sent with.
    ///
    /// `Content-Type` is only present for JSON bodies.
    #[must_use]
    pub fn request_headers(&self, request: &HttpRequest) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();
        if let Some(data_type) = request.body.data_type() {
            headers.insert(
                "Content-Type".to_string(),
                data_type.as_content_type().to_string(),
            );
        }
        headers
    }

    /// Sends a request and reads the full response.
    ///
    /// The body is always drained, on success and on failure, so the
    /// connection can be reused.
    ///
    /// # Errors
    ///
    /// - [`ArmError::Transport`] if no response was obtained or the body could not be read
    /// - [`ArmError::Response`] for non-2xx responses
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ArmError> {
        let url = self.request_url(&request);
        let headers = self.request_headers(&request);

        tracing::debug!(method = %request.http_method, url = %url, "Sending Resource Manager request");

        let mut req_builder = self
            .client
            .request(request.http_method.as_reqwest(), url.as_str());
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = request.body.as_bytes() {
            req_builder = req_builder.body(body.to_vec());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let metadata = OperationMetadata::from_headers(code, &res_headers);
        let content_type = res_headers
            .get("content-type")
            .and_then(|values| values.first())
            .cloned();

        tracing::debug!(
            status = code,
            request_id = metadata.request_id.as_deref().unwrap_or_default(),
            remaining_reads = ?metadata.rate_limit_remaining_reads,
            "Received Resource Manager response"
        );

        if metadata.is_success() {
            let body = res.bytes().await?.to_vec();
            return Ok(HttpResponse {
                metadata,
                content_type,
                body,
            });
        }

        let (body, cause) = match res.bytes().await {
            Ok(bytes) => Self::decode_error_body(content_type.as_deref(), &bytes),
            Err(e) => (ErrorBody::Text(String::new()), Some(ResponseBodyError::Read(e))),
        };

        tracing::warn!(
            status = code,
            request_id = metadata.request_id.as_deref().unwrap_or_default(),
            "Resource Manager request to {} failed",
            url
        );

        Err(HttpResponseError {
            code,
            body,
            metadata,
            cause,
        }
        .into())
    }

    /// Sends a request and decodes the JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Everything [`execute`](Self::execute) returns, plus
    /// [`ArmError::Decoding`] if the body does not match `T`.
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<(T, OperationMetadata), ArmError> {
        let response = self.execute(request).await?;
        let value = response.json()?;
        Ok((value, response.metadata))
    }

    /// Sends a request and appends the raw body to `sink` verbatim.
    ///
    /// # Errors
    ///
    /// Everything [`execute`](Self::execute) returns.
    pub async fn execute_into(
        &self,
        request: HttpRequest,
        sink: &mut Vec<u8>,
    ) -> Result<OperationMetadata, ArmError> {
        let response = self.execute(request).await?;
        sink.extend_from_slice(&response.body);
        Ok(response.metadata)
    }

    /// Sends a request and discards the body.
    ///
    /// # Errors
    ///
    /// Everything [`execute`](Self::execute) returns.
    pub async fn execute_discard(&self, request: HttpRequest) -> Result<OperationMetadata, ArmError> {
        self.execute(request).await.map(|response| response.metadata)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Decodes a non-2xx body: JSON when labeled as such, raw text otherwise.
    fn decode_error_body(
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> (ErrorBody, Option<ResponseBodyError>) {
        let is_json = content_type.is_some_and(|value| value.contains(JSON_CONTENT_TYPE));
        let text = || String::from_utf8_lossy(bytes).into_owned();

        if !is_json {
            return (ErrorBody::Text(text()), None);
        }

        match serde_json::from_slice(bytes) {
            Ok(value) => (ErrorBody::Json(value), None),
            Err(e) => (ErrorBody::Text(text()), Some(ResponseBodyError::Parse(e))),
        }
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header_names: Vec<&str> =
            self.default_headers.keys().map(String::as_str).collect();
        header_names.sort_unstable();

        f.debug_struct("HttpClient")
            .field("base_path", &self.base_path)
            .field("default_headers", &header_names)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{CertificateCredentials, TokenCredentials};
    use crate::clients::http_request::HttpMethod;
    use crate::config::{AccessToken, SubscriptionId};
    use serde_json::json;

    fn token_config() -> ClientConfig {
        ClientConfig::builder()
            .token_credentials(TokenCredentials::new(
                SubscriptionId::new("sub-a").unwrap(),
                AccessToken::new("token-a").unwrap(),
            ))
            .build()
            .unwrap()
    }

    fn certificate_config() -> ClientConfig {
        ClientConfig::builder()
            .certificate_credentials(
                CertificateCredentials::new(SubscriptionId::new("sub-a").unwrap(), vec![1, 2])
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_bearer_header_for_token_credentials() {
        let client = HttpClient::new(&token_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer token-a".to_string())
        );
    }

    #[test]
    fn test_no_authorization_header_for_certificate_credentials() {
        let client = HttpClient::new(&certificate_config()).unwrap();
        assert!(client.default_headers().get("Authorization").is_none());
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&token_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let config = ClientConfig::builder()
            .token_credentials(TokenCredentials::new(
                SubscriptionId::new("sub-a").unwrap(),
                AccessToken::new("token-a").unwrap(),
            ))
            .user_agent_prefix("MyTool/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyTool/1.0 | "));
        assert!(user_agent.contains("Azure RM Rust Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_request_url_trims_base_path_slash() {
        let client = HttpClient::new(&token_config()).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "/subscriptions/sub-a/resources")
            .build()
            .unwrap();

        assert_eq!(
            client.request_url(&request),
            "https://management.azure.com/subscriptions/sub-a/resources"
        );
    }

    #[test]
    fn test_request_url_keeps_absolute_target() {
        let client = HttpClient::new(&token_config()).unwrap();
        let link = "https://other.example.com/page?$skiptoken=x%3D";
        let request = HttpRequest::absolute(HttpMethod::Get, link).build().unwrap();

        assert_eq!(client.request_url(&request), link);
    }

    #[test]
    fn test_content_type_only_for_json_bodies() {
        let client = HttpClient::new(&token_config()).unwrap();

        let json_request = HttpRequest::builder(HttpMethod::Put, "/x")
            .json(&json!({"location": "westus"}))
            .build()
            .unwrap();
        assert_eq!(
            client.request_headers(&json_request).get("Content-Type"),
            Some(&"application/json".to_string())
        );

        let empty_request = HttpRequest::builder(HttpMethod::Get, "/x").build().unwrap();
        assert!(client
            .request_headers(&empty_request)
            .get("Content-Type")
            .is_none());

        let text_request = HttpRequest::builder(HttpMethod::Post, "/x")
            .text("raw")
            .build()
            .unwrap();
        assert!(client
            .request_headers(&text_request)
            .get("Content-Type")
            .is_none());
    }

    #[test]
    fn test_decode_error_body_json() {
        let (body, cause) = HttpClient::decode_error_body(
            Some("application/json; charset=utf-8"),
            br#"{"error":{"code":"NotFound"}}"#,
        );
        assert_eq!(body, ErrorBody::Json(json!({"error": {"code": "NotFound"}})));
        assert!(cause.is_none());
    }

    #[test]
    fn test_decode_error_body_text() {
        let (body, cause) = HttpClient::decode_error_body(Some("text/html"), b"<h1>502</h1>");
        assert_eq!(body, ErrorBody::Text("<h1>502</h1>".to_string()));
        assert!(cause.is_none());

        let (body, _) = HttpClient::decode_error_body(None, b"plain");
        assert_eq!(body, ErrorBody::Text("plain".to_string()));
    }

    #[test]
    fn test_decode_error_body_malformed_json_keeps_text() {
        let (body, cause) = HttpClient::decode_error_body(Some("application/json"), b"{oops");
        assert_eq!(body, ErrorBody::Text("{oops".to_string()));
        assert!(matches!(cause, Some(ResponseBodyError::Parse(_))));
    }

    #[test]
    fn test_parse_response_headers_keeps_non_ascii_values() {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "X-MS-Request-Id",
            reqwest::header::HeaderValue::from_bytes(b"req-\xe9-1").unwrap(),
        );

        let parsed = HttpClient::parse_response_headers(&headers);
        let metadata = OperationMetadata::from_headers(200, &parsed);
        let request_id = metadata.request_id.unwrap();
        assert!(request_id.starts_with("req-"));
        assert!(request_id.ends_with("-1"));
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let client = HttpClient::new(&token_config()).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("Authorization"));
        assert!(!debug.contains("token-a"));
    }
}
