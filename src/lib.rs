//! # Azure Resource Manager Rust Client
//!
//! A typed Rust client for the Azure Resource Manager REST API, providing
//! validated configuration, credential handling and an async HTTP pipeline
//! that classifies every failure.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for subscription ids, tokens, endpoints and API versions
//! - Token or management-certificate credentials via [`Credential`]
//! - An async HTTP client that extracts [`OperationMetadata`] from every response
//! - Resource operations: list with filters and pagination, get, delete,
//!   existence checks, create-or-update and move
//!
//! ## Quick Start
//!
//! ```rust
//! use azure_rm::{AccessToken, ClientConfig, ResourceManagementClient, SubscriptionId, TokenCredentials};
//!
//! let config = ClientConfig::builder()
//!     .token_credentials(TokenCredentials::new(
//!         SubscriptionId::new("00000000-0000-0000-0000-000000000000").unwrap(),
//!         AccessToken::new("eyJ0eXAi...").unwrap(),
//!     ))
//!     .api_version("2015-01-01")
//!     .build()
//!     .unwrap();
//!
//! let client = ResourceManagementClient::new(config).unwrap();
//! ```
//!
//! ## Listing Resources
//!
//! ```rust,ignore
//! use azure_rm::ResourceListParameters;
//!
//! let mut page = client
//!     .resources()
//!     .list(&ResourceListParameters {
//!         resource_type: Some("Microsoft.Web/sites".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! loop {
//!     for resource in &page.values {
//!         println!("{}", resource.id);
//!     }
//!     if !page.has_next_page() {
//!         break;
//!     }
//!     page = client.resources().list_next(&page.next_link).await?;
//! }
//! ```
//!
//! ## Checking Existence
//!
//! A 404 is reported as `exists: false`; every other failure is an error.
//!
//! ```rust,ignore
//! use azure_rm::ResourceIdentity;
//!
//! let identity = ResourceIdentity::new("Microsoft.Web", "sites", "my-site", "2014-04-01");
//! let result = client.resources().check_existence("my-group", &identity).await?;
//! println!("exists: {}", result.exists);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is passed to the client explicitly
//! - **Fail-fast validation**: newtypes reject invalid input at construction
//! - **Thread-safe**: [`ResourceManagementClient`] is `Send + Sync`
//! - **No retries**: failures are returned to the caller as [`ArmError`]

pub mod auth;
mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use auth::{CertificateCredentials, Credential, TokenCredentials};
pub use client::ResourceManagementClient;
pub use config::{
    AccessToken, ApiVersion, BasePath, ClientConfig, ClientConfigBuilder, SubscriptionId,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ArmError, ErrorBody, HttpClient, HttpMethod, HttpRequest, HttpResponse, HttpResponseError,
    OperationMetadata,
};

// Re-export resource types
pub use resources::{
    ExistenceOutcome, ExistenceResult, MoveResourcesParameters, OperationResult, Resource,
    ResourceDefinition, ResourceIdentity, ResourceListParameters, ResourceListResult,
    ResourceOperations,
};
