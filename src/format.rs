//! # Address Formatting
//!
//! Text rendering for endpoints: numeric by default, name-resolved on
//! request.
//!
//! Two contracts live here and they differ on purpose:
//!
//! - [`numeric_parts`] serves machine paths (log records, cache keys,
//!   exchanging addresses with peers). Feeding it an address with nothing
//!   to render is a programmer error, so it panics.
//! - [`describe`] and [`describe_numeric`] serve human-facing paths. They
//!   never fail: whatever cannot be rendered or resolved becomes the
//!   `"unknown"` placeholder, and the cause is logged.

use crate::config::DisplayConfig;
use crate::core::address::EndpointAddr;
use crate::resolve::NameResolver;
use std::fmt;
use tracing::warn;

/// Placeholder for a host or service that cannot be rendered.
pub const UNKNOWN: &str = "unknown";

/// Strips an IPv6 zone suffix (`%eth0`) from an address literal.
///
/// Strings without a zone come back unchanged.
pub fn strip_zone(address: &str) -> &str {
    match address.find('%') {
        Some(cut) => &address[..cut],
        None => address,
    }
}

/// Numeric address and port strings for a concrete endpoint.
///
/// The address string carries no zone suffix and no brackets; the port is
/// rendered in decimal.
///
/// ```rust
/// use netaddr_core::core::address::EndpointAddr;
/// use netaddr_core::format::numeric_parts;
///
/// let addr = EndpointAddr::V4 { addr: [192, 168, 1, 9], port: 655 };
/// assert_eq!(numeric_parts(&addr), ("192.168.1.9".to_string(), "655".to_string()));
/// ```
///
/// # Panics
/// Panics on [`EndpointAddr::Unspecified`]: numeric callers have no use for
/// a placeholder. Use [`describe_numeric`] where one is acceptable.
pub fn numeric_parts(addr: &EndpointAddr) -> (String, String) {
    match (addr.ip(), addr.port()) {
        (Some(ip), Some(port)) => {
            let text = ip.to_string();
            (strip_zone(&text).to_string(), port.to_string())
        }
        _ => panic!("cannot render an unspecified address as numeric text"),
    }
}

/// Human-readable `"<address> port <port>"` without consulting a resolver.
///
/// `Unspecified` renders as `"unknown port unknown"`.
pub fn describe_numeric(addr: &EndpointAddr) -> String {
    match (addr.ip(), addr.port()) {
        (Some(ip), Some(port)) => {
            let text = ip.to_string();
            format!("{} port {}", strip_zone(&text), port)
        }
        _ => format!("{UNKNOWN} port {UNKNOWN}"),
    }
}

/// Human-readable rendering honoring the display configuration.
///
/// With `resolve_names` off this is [`describe_numeric`]. With it on, the
/// resolver supplies a reverse-looked-up name; a failed lookup degrades to
/// the placeholder form after logging a warning. The returned string is
/// always usable.
pub async fn describe<R>(addr: &EndpointAddr, display: &DisplayConfig, resolver: &R) -> String
where
    R: NameResolver + ?Sized,
{
    if !display.resolve_names {
        return describe_numeric(addr);
    }

    match resolver.reverse(addr).await {
        Ok(info) => format!("{} port {}", strip_zone(&info.host), info.service),
        Err(e) => {
            warn!(error = %e, "Reverse lookup failed, rendering placeholder");
            format!("{UNKNOWN} port {UNKNOWN}")
        }
    }
}

impl fmt::Display for EndpointAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe_numeric(self))
    }
}
