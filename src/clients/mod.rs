//! HTTP client types for Resource Manager communication.
//!
//! This module provides the request/response pipeline every resource
//! operation is built on: the request builder, the response dispatcher and
//! the error taxonomy.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async dispatcher that sends requests and classifies responses
//! - [`HttpRequest`]: A request to be sent to the API, built with [`HttpRequestBuilder`]
//! - [`RequestBody`]: An empty, verbatim text, or JSON-encoded request body
//! - [`HttpResponse`]: A fully drained successful response
//! - [`OperationMetadata`]: Request ids, rate limits and status of one call
//! - [`ArmError`]: Encoding, transport, response and decoding failures
//!
//! # Example
//!
//! ```rust,ignore
//! use azure_rm::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(
//!     HttpMethod::Get,
//!     "/subscriptions/my-sub/resourcegroups?api-version=2015-01-01",
//! )
//! .build()?;
//!
//! let (groups, metadata) = client.execute_json::<serde_json::Value>(request).await?;
//! println!("{} reads left", metadata.rate_limit_remaining_reads.unwrap_or_default());
//! ```
//!
//! # Sinks
//!
//! A response body can be decoded as JSON ([`HttpClient::execute_json`]),
//! copied verbatim ([`HttpClient::execute_into`]) or discarded
//! ([`HttpClient::execute_discard`]). Every form returns the
//! [`OperationMetadata`] of the call.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ArmError, ErrorBody, HttpResponseError, ResponseBodyError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{
    DataType, HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody, RequestTarget,
};
pub use http_response::{
    HttpResponse, OperationMetadata, CORRELATION_REQUEST_ID_HEADER,
    RATE_LIMIT_REMAINING_READS_HEADER, REQUEST_ID_HEADER, ROUTING_REQUEST_ID_HEADER,
};
