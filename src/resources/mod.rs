//! Resource operations for the Resource Manager API.
//!
//! # Overview
//!
//! - [`ResourceOperations`]: list, get, delete, existence checks, create-or-update and move
//! - [`Resource`] and [`ResourceListResult`]: decoded response shapes
//! - [`ResourceIdentity`]: addresses one resource, including its provider API version
//! - [`OperationResult`]: a decoded value plus the call's [`OperationMetadata`]
//! - [`ExistenceOutcome`]: how a `get` result answers an existence check
//!
//! Subscription-level operations use the client's API version. Operations on a
//! single resource use the provider API version from its [`ResourceIdentity`].
//!
//! [`OperationMetadata`]: crate::clients::OperationMetadata

mod existence;
mod models;
mod operations;
pub(crate) mod path;
mod response;

pub use existence::{ExistenceOutcome, ExistenceResult};
pub use models::{
    MoveResourcesParameters, Resource, ResourceDefinition, ResourceIdentity,
    ResourceListParameters, ResourceListResult,
};
pub use operations::ResourceOperations;
pub use response::OperationResult;
