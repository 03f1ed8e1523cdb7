//! Data models for the resource operations.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Reads a missing or `null` field as its default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A resource as returned by Resource Manager.
///
/// `properties` is kept as raw JSON because its shape depends on
/// `resource_type`; use [`properties_as`](Self::properties_as) to project it
/// into a typed value.
///
/// # Example
///
/// ```rust
/// use azure_rm::Resource;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct SiteProperties {
///     state: String,
/// }
///
/// let resource: Resource = serde_json::from_str(r#"{
///     "id": "/subscriptions/s/resourceGroups/rg/providers/Microsoft.Web/sites/app",
///     "name": "app",
///     "type": "Microsoft.Web/sites",
///     "location": "westus",
///     "properties": { "state": "Running" }
/// }"#).unwrap();
///
/// let properties: SiteProperties = resource.properties_as().unwrap();
/// assert_eq!(properties.state, "Running");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    /// Fully qualified resource id.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Resource name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Resource type, e.g. `Microsoft.Web/sites`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub resource_type: String,
    /// Azure region.
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    /// Resource tags.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: HashMap<String, String>,
    /// Type-specific properties, not validated.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub properties: serde_json::Value,
}

impl Resource {
    /// Decodes `properties` into `T`.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the properties do not match `T`.
    pub fn properties_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.properties)
    }
}

/// One page of a resource listing.
///
/// A non-empty `next_link` means more pages exist; pass it verbatim to
/// [`ResourceOperations::list_next`](crate::ResourceOperations::list_next).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceListResult {
    /// Resources on this page.
    #[serde(rename = "value", default, deserialize_with = "null_as_default")]
    pub values: Vec<Resource>,
    /// Continuation link, empty on the last page.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub next_link: String,
}

impl ResourceListResult {
    /// Returns `true` if another page can be fetched.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        !self.next_link.is_empty()
    }
}

/// Addresses a single resource within a resource group.
///
/// Every field is inserted into the request path as is, without
/// percent-encoding. Names containing `?`, `#` or `/` change the meaning of
/// the URL; Resource Manager does not allow them in resource names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceIdentity {
    /// Provider namespace, e.g. `Microsoft.Web`.
    pub resource_provider_namespace: String,
    /// Path of the parent resource, empty for top-level resources.
    pub parent_resource_path: String,
    /// Resource type within the provider, e.g. `sites`.
    pub resource_type: String,
    /// Resource name.
    pub resource_name: String,
    /// API version of the provider, used instead of the client's version.
    pub resource_provider_api_version: String,
}

impl ResourceIdentity {
    /// Creates an identity for a top-level resource.
    #[must_use]
    pub fn new(
        namespace: impl Into<String>,
        resource_type: impl Into<String>,
        resource_name: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            resource_provider_namespace: namespace.into(),
            parent_resource_path: String::new(),
            resource_type: resource_type.into(),
            resource_name: resource_name.into(),
            resource_provider_api_version: api_version.into(),
        }
    }

    /// Sets the parent resource path for nested resources.
    #[must_use]
    pub fn with_parent(mut self, parent_resource_path: impl Into<String>) -> Self {
        self.parent_resource_path = parent_resource_path.into();
        self
    }
}

/// Optional filters for listing resources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceListParameters {
    /// Restrict the listing to one resource group. Inserted into the path
    /// without percent-encoding.
    pub resource_group_name: Option<String>,
    /// Only resources of this type.
    pub resource_type: Option<String>,
    /// Only resources carrying this tag name.
    pub tag_name: Option<String>,
    /// Only resources carrying this tag value.
    pub tag_value: Option<String>,
    /// Page size; `0` leaves it to the service.
    pub top: u32,
}

/// Body of a create-or-update request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResourceDefinition {
    /// Azure region.
    pub location: String,
    /// Resource tags.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
    /// Type-specific properties.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub properties: serde_json::Value,
}

/// Body of a move-resources request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoveResourcesParameters {
    /// Fully qualified ids of the resources to move.
    pub resources: Vec<String>,
    /// Fully qualified id of the destination resource group.
    pub target_resource_group: String,
}
