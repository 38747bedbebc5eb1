//! # netaddr-core
//!
//! Canonical socket-address representation, total ordering, and subnet-mask
//! bit arithmetic for routing and subnet-matching layers.
//!
//! The crate models an endpoint as an explicit family tag plus raw address
//! octets, gives all addresses a single deterministic order, and performs
//! prefix arithmetic directly on the octets. A thin formatter renders
//! endpoints for humans, optionally resolving them back to names through a
//! pluggable resolver.
//!
//! ## Components
//! - **Core**: [`crate::core::address`] model and [`crate::core::mask`] prefix arithmetic
//! - **Format**: numeric and name-resolved rendering
//! - **Resolve**: the [`resolve::NameResolver`] seam and the system backend
//! - **Config**: family preference and display policy
//!
//! ## Quick Start
//! ```rust
//! use netaddr_core::core::address::EndpointAddr;
//! use netaddr_core::core::mask::{apply_mask, masked_cmp};
//! use std::cmp::Ordering;
//!
//! // Does 192.168.1.200 live in 192.168.1.0/24?
//! let host = EndpointAddr::V4 { addr: [192, 168, 1, 200], port: 655 };
//! let network = [192, 168, 1, 0];
//! let octets = host.octets().expect("concrete address");
//! assert_eq!(masked_cmp(octets, &network, 24), Ordering::Equal);
//!
//! // Reduce an address to its network address
//! let mut masked = [192, 168, 1, 200];
//! apply_mask(&mut masked, 24);
//! assert_eq!(masked, network);
//! ```
//!
//! ## Concurrency
//! The address model and mask operations are pure: they share no state and
//! are freely usable from any thread. Only the resolver does I/O, and it is
//! async behind [`resolve::NameResolver`].

pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod resolve;

// Re-export the primary surface at the crate root
pub use crate::config::{DisplayConfig, FamilyPreference, NetConfig, ResolveConfig};
pub use crate::core::address::{AddrFamily, EndpointAddr};
pub use crate::core::mask::{apply_mask, host_portion_is_zero, masked_cmp, masked_copy};
pub use crate::error::{AddressError, Result};
pub use crate::format::{describe, describe_numeric, numeric_parts, strip_zone};
pub use crate::resolve::{NameInfo, NameResolver, SystemResolver};
