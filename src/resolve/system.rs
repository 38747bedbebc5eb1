//! OS-backed name resolution.
//!
//! Forward lookups go through the runtime's `getaddrinfo` analog,
//! `tokio::net::lookup_host`, so `/etc/hosts` and `nsswitch` behave as the
//! platform says they should. Reverse lookups need PTR queries, which the
//! runtime does not expose, so those go through a `hickory` DNS resolver.

use crate::config::{FamilyPreference, ResolveConfig};
use crate::core::address::EndpointAddr;
use crate::error::{AddressError, Result};
use crate::resolve::{NameInfo, NameResolver};
use async_trait::async_trait;
use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use tracing::{debug, warn};

/// Resolver over the operating system and DNS.
///
/// Carries the configured family preference; candidates of the other
/// family are dropped before the caller sees them.
pub struct SystemResolver {
    dns: TokioResolver,
    family: FamilyPreference,
}

impl SystemResolver {
    /// Build a resolver honoring the given resolution policy.
    ///
    /// Uses the public DNS defaults rather than reading system resolver
    /// configuration, which keeps construction infallible.
    pub fn new(config: &ResolveConfig) -> Self {
        let dns = TokioResolver::builder_with_config(
            ResolverConfig::default(),
            TokioConnectionProvider::default(),
        )
        .build();
        Self {
            dns,
            family: config.address_family,
        }
    }
}

impl Default for SystemResolver {
    fn default() -> Self {
        Self::new(&ResolveConfig::default())
    }
}

#[async_trait]
impl NameResolver for SystemResolver {
    async fn resolve(&self, host: &str, service: &str) -> Result<Vec<EndpointAddr>> {
        let lookup_err = |reason: String| AddressError::Lookup {
            host: host.to_string(),
            service: service.to_string(),
            reason,
        };

        let port: u16 = service
            .parse()
            .map_err(|_| lookup_err("service is not a numeric port".to_string()))?;

        debug!(host, service, "Resolving endpoint");
        let found = tokio::net::lookup_host((host, port)).await.map_err(|e| {
            warn!(host, service, error = %e, "Forward lookup failed");
            lookup_err(e.to_string())
        })?;

        let candidates: Vec<EndpointAddr> = found
            .map(EndpointAddr::from)
            .filter(|addr| self.family.admits(addr.family()))
            .collect();

        if candidates.is_empty() {
            warn!(host, service, family = ?self.family, "No candidate matches the address family");
            return Err(lookup_err(
                "no address for the configured family".to_string(),
            ));
        }

        debug!(host, service, count = candidates.len(), "Resolved endpoint");
        Ok(candidates)
    }

    async fn reverse(&self, addr: &EndpointAddr) -> Result<NameInfo> {
        let std_addr = addr
            .to_std()
            .ok_or_else(|| AddressError::ReverseLookup("address is unspecified".to_string()))?;

        let ptr = self
            .dns
            .reverse_lookup(std_addr.ip())
            .await
            .map_err(|e| AddressError::ReverseLookup(e.to_string()))?;

        let name = ptr
            .iter()
            .next()
            .map(|record| record.to_string())
            .ok_or_else(|| AddressError::ReverseLookup("no PTR record".to_string()))?;

        Ok(NameInfo {
            // PTR answers come back fully qualified; drop the root dot
            host: name.trim_end_matches('.').to_string(),
            service: std_addr.port().to_string(),
        })
    }
}
