//! Authentication types for the Resource Manager client.
//!
//! # Overview
//!
//! - [`TokenCredentials`]: An Azure AD bearer token scoped to a subscription
//! - [`CertificateCredentials`]: A management certificate scoped to a subscription
//! - [`Credential`]: The tagged union a client is configured with
//!
//! Exactly one credential kind is active per client. The subscription used to
//! compose request paths always comes from the active credential.
//!
//! # Example
//!
//! ```rust
//! use azure_rm::{AccessToken, Credential, SubscriptionId, TokenCredentials};
//!
//! let credential: Credential = TokenCredentials::new(
//!     SubscriptionId::new("subscription-a").unwrap(),
//!     AccessToken::new("token-a").unwrap(),
//! )
//! .into();
//!
//! assert_eq!(credential.subscription_id().as_ref(), "subscription-a");
//! ```

mod credentials;

pub use credentials::{CertificateCredentials, Credential, TokenCredentials};
