//! # Address Model
//!
//! Family-tagged socket address with normalization and a total order.
//!
//! The representation keeps the address octets in network order so the mask
//! operations in [`crate::core::mask`] can work on them directly. The family
//! tag is explicit and closed: every address is IPv4, IPv6, or deliberately
//! absent, and code consuming the type cannot meet an unknown family.
//!
//! ## Ordering
//! Addresses order by family first (`Unspecified` < IPv4 < IPv6), then by
//! address octets as an unsigned big-endian comparison, then by port. The
//! IPv6 scope id never participates in comparison, equality, or hashing;
//! two addresses differing only by scope are the same endpoint.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};

/// Address family discriminant.
///
/// The declaration order is the comparison order and is part of the
/// [`EndpointAddr`] contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AddrFamily {
    /// No address; sorts before every concrete family.
    Unspecified,
    /// IPv4, four address octets.
    V4,
    /// IPv6, sixteen address octets.
    V6,
}

impl AddrFamily {
    /// Address width in bits, the upper bound for a prefix length.
    /// `Unspecified` has no address bytes and reports zero.
    pub const fn bit_width(self) -> u8 {
        match self {
            Self::Unspecified => 0,
            Self::V4 => 32,
            Self::V6 => 128,
        }
    }
}

/// A socket address: family tag, address octets in network order, and port.
///
/// `Unspecified` is a first-class value for "no address here" (an unresolved
/// peer, a wildcard listener slot) and is ordered before all concrete
/// addresses, so collections mixing placeholder and real entries still sort
/// deterministically.
///
/// ```rust
/// use netaddr_core::core::address::EndpointAddr;
///
/// let mut peers = vec![
///     EndpointAddr::V4 { addr: [1, 2, 3, 5], port: 80 },
///     EndpointAddr::V4 { addr: [1, 2, 3, 4], port: 81 },
///     EndpointAddr::V4 { addr: [1, 2, 3, 4], port: 80 },
/// ];
/// peers.sort();
/// assert_eq!(peers[0], EndpointAddr::V4 { addr: [1, 2, 3, 4], port: 80 });
/// assert_eq!(peers[1], EndpointAddr::V4 { addr: [1, 2, 3, 4], port: 81 });
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum EndpointAddr {
    /// An absent address.
    Unspecified,
    /// An IPv4 endpoint.
    V4 { addr: [u8; 4], port: u16 },
    /// An IPv6 endpoint. The scope id is carried for socket calls but is
    /// not part of the address identity.
    V6 {
        addr: [u8; 16],
        port: u16,
        scope_id: u32,
    },
}

impl EndpointAddr {
    /// The family tag of this address.
    pub const fn family(&self) -> AddrFamily {
        match self {
            Self::Unspecified => AddrFamily::Unspecified,
            Self::V4 { .. } => AddrFamily::V4,
            Self::V6 { .. } => AddrFamily::V6,
        }
    }

    /// The IP portion, if the address is concrete.
    pub fn ip(&self) -> Option<IpAddr> {
        match *self {
            Self::Unspecified => None,
            Self::V4 { addr, .. } => Some(IpAddr::V4(Ipv4Addr::from(addr))),
            Self::V6 { addr, .. } => Some(IpAddr::V6(Ipv6Addr::from(addr))),
        }
    }

    /// The port, if the address is concrete.
    pub const fn port(&self) -> Option<u16> {
        match *self {
            Self::Unspecified => None,
            Self::V4 { port, .. } | Self::V6 { port, .. } => Some(port),
        }
    }

    /// The IPv6 scope id, if any.
    pub const fn scope_id(&self) -> Option<u32> {
        match *self {
            Self::V6 { scope_id, .. } => Some(scope_id),
            _ => None,
        }
    }

    /// The raw address octets in network order, ready for the mask
    /// operations. `None` for `Unspecified`.
    pub fn octets(&self) -> Option<&[u8]> {
        match self {
            Self::Unspecified => None,
            Self::V4 { addr, .. } => Some(addr.as_slice()),
            Self::V6 { addr, .. } => Some(addr.as_slice()),
        }
    }

    /// Whether this is an IPv4-mapped IPv6 address (`::ffff:a.b.c.d`).
    pub const fn is_v4_mapped(&self) -> bool {
        matches!(
            self,
            Self::V6 {
                addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xFF, 0xFF, ..],
                ..
            }
        )
    }

    /// Collapses an IPv4-mapped IPv6 address to its IPv4 form, keeping the
    /// port. Every other address, including near-misses like `::1`, is
    /// returned unchanged; the operation is idempotent.
    pub const fn to_canonical(self) -> Self {
        match self {
            Self::V6 {
                addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xFF, 0xFF, a, b, c, d],
                port,
                ..
            } => Self::V4 {
                addr: [a, b, c, d],
                port,
            },
            other => other,
        }
    }

    /// Converts to a standard library socket address. `None` for
    /// `Unspecified`, which has no socket form.
    pub fn to_std(&self) -> Option<SocketAddr> {
        match *self {
            Self::Unspecified => None,
            Self::V4 { addr, port } => {
                Some(SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::from(addr), port)))
            }
            Self::V6 {
                addr,
                port,
                scope_id,
            } => Some(SocketAddr::V6(SocketAddrV6::new(
                Ipv6Addr::from(addr),
                port,
                0,
                scope_id,
            ))),
        }
    }
}

impl Ord for EndpointAddr {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Unspecified, Self::Unspecified) => Ordering::Equal,
            (Self::V4 { addr: a, port: p }, Self::V4 { addr: b, port: q }) => {
                a.cmp(b).then_with(|| p.cmp(q))
            }
            (
                Self::V6 {
                    addr: a, port: p, ..
                },
                Self::V6 {
                    addr: b, port: q, ..
                },
            ) => a.cmp(b).then_with(|| p.cmp(q)),
            // Families differ, so the family order decides.
            _ => self.family().cmp(&other.family()),
        }
    }
}

impl PartialOrd for EndpointAddr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EndpointAddr {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EndpointAddr {}

// Hash must agree with the manual equality above: the scope id stays out.
impl Hash for EndpointAddr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family().hash(state);
        match self {
            Self::Unspecified => {}
            Self::V4 { addr, port } => {
                addr.hash(state);
                port.hash(state);
            }
            Self::V6 { addr, port, .. } => {
                addr.hash(state);
                port.hash(state);
            }
        }
    }
}

impl From<SocketAddrV4> for EndpointAddr {
    fn from(sa: SocketAddrV4) -> Self {
        Self::V4 {
            addr: sa.ip().octets(),
            port: sa.port(),
        }
    }
}

impl From<SocketAddrV6> for EndpointAddr {
    fn from(sa: SocketAddrV6) -> Self {
        Self::V6 {
            addr: sa.ip().octets(),
            port: sa.port(),
            scope_id: sa.scope_id(),
        }
    }
}

impl From<SocketAddr> for EndpointAddr {
    fn from(sa: SocketAddr) -> Self {
        match sa {
            SocketAddr::V4(v4) => v4.into(),
            SocketAddr::V6(v6) => v6.into(),
        }
    }
}
