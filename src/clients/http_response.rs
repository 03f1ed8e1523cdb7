//! HTTP response types for the Resource Manager client.
//!
//! This module provides [`OperationMetadata`], the per-call side channel
//! extracted from response headers, and [`HttpResponse`], a fully drained
//! successful response.

use std::collections::HashMap;
use std::io::Write;

use serde::de::DeserializeOwned;

use crate::clients::errors::ArmError;

/// Header carrying the service-assigned request id.
pub const REQUEST_ID_HEADER: &str = "x-ms-request-id";
/// Header carrying the correlation id shared by related requests.
pub const CORRELATION_REQUEST_ID_HEADER: &str = "x-ms-correlation-request-id";
/// Header identifying the routing path of the request.
pub const ROUTING_REQUEST_ID_HEADER: &str = "x-ms-routing-request-id";
/// Header carrying the remaining subscription read quota.
pub const RATE_LIMIT_REMAINING_READS_HEADER: &str = "x-ms-ratelimit-remaining-subscription-reads";

/// Metadata describing one Resource Manager call.
///
/// Populated from the response headers on both success and failure, so
/// callers can observe rate limits and correlate requests regardless of
/// the outcome. Never part of the decoded body.
///
/// # Example
///
/// ```rust
/// use azure_rm::clients::OperationMetadata;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert(
///     "x-ms-ratelimit-remaining-subscription-reads".to_string(),
///     vec!["14999".to_string()],
/// );
///
/// let metadata = OperationMetadata::from_headers(200, &headers);
/// assert_eq!(metadata.rate_limit_remaining_reads, Some(14999));
/// assert!(metadata.request_id.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperationMetadata {
    /// Value of `x-ms-request-id`.
    pub request_id: Option<String>,
    /// Value of `x-ms-correlation-request-id`.
    pub correlation_request_id: Option<String>,
    /// Value of `x-ms-routing-request-id`.
    pub routing_request_id: Option<String>,
    /// Parsed `x-ms-ratelimit-remaining-subscription-reads`.
    pub rate_limit_remaining_reads: Option<u32>,
    /// The HTTP status code.
    pub status_code: u16,
}

impl OperationMetadata {
    /// Extracts metadata from lowercase-keyed response headers.
    #[must_use]
    pub fn from_headers(status_code: u16, headers: &HashMap<String, Vec<String>>) -> Self {
        let first = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            request_id: first(REQUEST_ID_HEADER),
            correlation_request_id: first(CORRELATION_REQUEST_ID_HEADER),
            routing_request_id: first(ROUTING_REQUEST_ID_HEADER),
            rate_limit_remaining_reads: first(RATE_LIMIT_REMAINING_READS_HEADER)
                .and_then(|value| value.parse().ok()),
            status_code,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_code >= 200 && self.status_code <= 299
    }
}

/// A successful, fully read response.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// Metadata extracted from the response headers.
    pub metadata: OperationMetadata,
    /// The `Content-Type` header, if present.
    pub content_type: Option<String>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Decodes the body as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Decoding`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ArmError> {
        serde_json::from_slice(&self.body).map_err(|source| ArmError::Decoding {
            metadata: self.metadata.clone(),
            source,
        })
    }

    /// Copies the raw body into `sink` verbatim.
    ///
    /// # Errors
    ///
    /// Returns any error produced by the sink.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> std::io::Result<()> {
        sink.write_all(&self.body)?;
        sink.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in pairs {
            map.entry((*name).to_string())
                .or_default()
                .push((*value).to_string());
        }
        map
    }

    #[test]
    fn test_metadata_reads_all_headers() {
        let headers = headers(&[
            ("x-ms-request-id", "req-1"),
            ("x-ms-correlation-request-id", "corr-1"),
            ("x-ms-routing-request-id", "WESTUS:20150101T000000Z:route-1"),
            ("x-ms-ratelimit-remaining-subscription-reads", "14998"),
        ]);

        let metadata = OperationMetadata::from_headers(200, &headers);
        assert_eq!(metadata.request_id.as_deref(), Some("req-1"));
        assert_eq!(metadata.correlation_request_id.as_deref(), Some("corr-1"));
        assert_eq!(
            metadata.routing_request_id.as_deref(),
            Some("WESTUS:20150101T000000Z:route-1")
        );
        assert_eq!(metadata.rate_limit_remaining_reads, Some(14998));
        assert_eq!(metadata.status_code, 200);
    }

    #[test]
    fn test_metadata_tolerates_missing_and_malformed_headers() {
        let headers = headers(&[("x-ms-ratelimit-remaining-subscription-reads", "lots")]);
        let metadata = OperationMetadata::from_headers(404, &headers);

        assert_eq!(metadata.rate_limit_remaining_reads, None);
        assert!(metadata.request_id.is_none());
        assert_eq!(metadata.status_code, 404);
    }

    #[test]
    fn test_is_success_for_2xx_only() {
        for code in 200..=299 {
            let metadata = OperationMetadata {
                status_code: code,
                ..OperationMetadata::default()
            };
            assert!(metadata.is_success(), "Expected {code} to be a success");
        }

        for code in [199, 300, 304, 400, 404, 500] {
            let metadata = OperationMetadata {
                status_code: code,
                ..OperationMetadata::default()
            };
            assert!(!metadata.is_success(), "Expected {code} to be a failure");
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[test]
    fn test_json_decoding_failure_carries_metadata() {
        let response = HttpResponse {
            metadata: OperationMetadata {
                status_code: 200,
                request_id: Some("req-9".to_string()),
                ..OperationMetadata::default()
            },
            content_type: Some("application/json".to_string()),
            body: br#"{"id": 1}"#.to_vec(),
        };

        match response.json::<Named>() {
            Err(ArmError::Decoding { metadata, .. }) => {
                assert_eq!(metadata.request_id.as_deref(), Some("req-9"));
            }
            other => panic!("Expected decoding error, got {other:?}"),
        }
    }

    #[test]
    fn test_write_to_copies_bytes_verbatim() {
        let body = vec![0_u8, 159, 146, 150, b'\n', 255];
        let response = HttpResponse {
            metadata: OperationMetadata::default(),
            content_type: Some("application/octet-stream".to_string()),
            body: body.clone(),
        };

        let mut sink = Vec::new();
        response.write_to(&mut sink).unwrap();
        assert_eq!(sink, body);
    }
}
