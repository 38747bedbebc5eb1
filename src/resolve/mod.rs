//! # Name Resolution
//!
//! The resolver seam between the address model and the outside world.
//!
//! Resolution sits behind a trait so callers can swap the system resolver
//! for caches or scripted doubles in tests; everything else in the crate
//! consumes [`NameResolver`] and never a concrete backend.
//!
//! ## Components
//! - **NameResolver**: Forward and reverse lookup interface
//! - **SystemResolver**: OS-backed implementation over `tokio` and `hickory`

pub mod system;

// Re-export the default backend
pub use system::SystemResolver;

use crate::core::address::EndpointAddr;
use crate::error::Result;
use async_trait::async_trait;

/// Host and service strings for an endpoint, as produced by reverse lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameInfo {
    /// Hostname, or a numeric literal when no name is registered.
    pub host: String,
    /// Service rendered as a numeric port string.
    pub service: String,
}

/// Forward and reverse name resolution.
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Resolves a host and service string into candidate endpoints.
    ///
    /// The returned list is never empty; resolution that produces no usable
    /// candidate is an error.
    ///
    /// # Errors
    /// Returns [`crate::error::AddressError::Lookup`] when the name does not
    /// resolve, the service is not usable, or no candidate matches the
    /// configured address family.
    async fn resolve(&self, host: &str, service: &str) -> Result<Vec<EndpointAddr>>;

    /// Finds the name registered for an endpoint.
    ///
    /// # Errors
    /// Returns [`crate::error::AddressError::ReverseLookup`] when the
    /// address has no name or the lookup fails.
    async fn reverse(&self, addr: &EndpointAddr) -> Result<NameInfo>;
}
