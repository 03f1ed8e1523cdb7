//! Resource operations.

use crate::client::ResourceManagementClient;
use crate::clients::{ArmError, HttpMethod, HttpRequest, OperationMetadata};
use crate::resources::existence::{ExistenceOutcome, ExistenceResult};
use crate::resources::models::{
    MoveResourcesParameters, Resource, ResourceDefinition, ResourceIdentity,
    ResourceListParameters, ResourceListResult,
};
use crate::resources::path;
use crate::resources::response::OperationResult;

/// Operations on resources within the client's subscription.
///
/// Obtained from [`ResourceManagementClient::resources`]. Each call issues
/// exactly one request; pagination is driven by the caller through
/// [`list_next`](Self::list_next).
///
/// # Example
///
/// ```rust,ignore
/// use azure_rm::{ResourceIdentity, ResourceListParameters};
///
/// let page = client.resources().list(&ResourceListParameters {
///     resource_group_name: Some("my-group".to_string()),
///     top: 10,
///     ..Default::default()
/// }).await?;
///
/// for resource in &page.values {
///     println!("{} ({})", resource.name, resource.resource_type);
/// }
///
/// if page.has_next_page() {
///     let next = client.resources().list_next(&page.next_link).await?;
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ResourceOperations<'a> {
    client: &'a ResourceManagementClient,
}

impl<'a> ResourceOperations<'a> {
    pub(crate) const fn new(client: &'a ResourceManagementClient) -> Self {
        Self { client }
    }

    /// Lists resources in the subscription, or in one resource group.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails or the body cannot be decoded.
    pub async fn list(
        &self,
        parameters: &ResourceListParameters,
    ) -> Result<OperationResult<ResourceListResult>, ArmError> {
        let path = path::list_path(
            self.client.subscription_id(),
            self.client.config().api_version(),
            parameters,
        );
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        self.fetch(request).await
    }

    /// Fetches the page behind a `nextLink`, sent verbatim.
    ///
    /// A blank link marks the last page: no request is sent and an empty
    /// page with default metadata (status code `0`) is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails or the body cannot be decoded.
    pub async fn list_next(
        &self,
        next_link: &str,
    ) -> Result<OperationResult<ResourceListResult>, ArmError> {
        if next_link.trim().is_empty() {
            return Ok(OperationResult::new(
                ResourceListResult::default(),
                OperationMetadata::default(),
            ));
        }
        let request = HttpRequest::absolute(HttpMethod::Get, next_link).build()?;
        self.fetch(request).await
    }

    /// Gets a single resource.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails or the body cannot be decoded.
    pub async fn get(
        &self,
        resource_group_name: &str,
        identity: &ResourceIdentity,
    ) -> Result<OperationResult<Resource>, ArmError> {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            self.resource_path(resource_group_name, identity),
        )
        .build()?;
        self.fetch(request).await
    }

    /// Deletes a single resource. The response body is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn delete(
        &self,
        resource_group_name: &str,
        identity: &ResourceIdentity,
    ) -> Result<OperationMetadata, ArmError> {
        let request = HttpRequest::builder(
            HttpMethod::Delete,
            self.resource_path(resource_group_name, identity),
        )
        .build()?;
        self.client.http_client().execute_discard(request).await
    }

    /// Checks whether a resource exists.
    ///
    /// A 404 answers `exists: false`. Any other failure is returned as is.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] for every failure other than a 404 response.
    pub async fn check_existence(
        &self,
        resource_group_name: &str,
        identity: &ResourceIdentity,
    ) -> Result<ExistenceResult, ArmError> {
        let outcome = ExistenceOutcome::classify(self.get(resource_group_name, identity).await);
        tracing::debug!(
            resource = %identity.resource_name,
            exists = ?outcome.exists(),
            "Checked resource existence"
        );
        outcome.into_result()
    }

    /// Creates or replaces a resource.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Encoding`] if `definition` cannot be encoded, or
    /// any other [`ArmError`] if the request fails.
    pub async fn create_or_update(
        &self,
        resource_group_name: &str,
        identity: &ResourceIdentity,
        definition: &ResourceDefinition,
    ) -> Result<OperationResult<Resource>, ArmError> {
        let request = HttpRequest::builder(
            HttpMethod::Put,
            self.resource_path(resource_group_name, identity),
        )
        .json(definition)
        .build()?;
        self.fetch(request).await
    }

    /// Moves resources from `source_group_name` to another resource group.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Encoding`] if `parameters` cannot be encoded, or
    /// any other [`ArmError`] if the request fails.
    pub async fn move_resources(
        &self,
        source_group_name: &str,
        parameters: &MoveResourcesParameters,
    ) -> Result<OperationMetadata, ArmError> {
        let path = path::move_path(
            self.client.subscription_id(),
            source_group_name,
            self.client.config().api_version(),
        );
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .json(parameters)
            .build()?;
        self.client.http_client().execute_discard(request).await
    }

    fn resource_path(&self, resource_group_name: &str, identity: &ResourceIdentity) -> String {
        path::resource_path(self.client.subscription_id(), resource_group_name, identity)
    }

    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<OperationResult<T>, ArmError> {
        self.client
            .http_client()
            .execute_json(request)
            .await
            .map(OperationResult::from)
    }
}
