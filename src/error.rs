//! # Error Types
//!
//! Recoverable errors for address resolution and configuration.
//!
//! Only operations that depend on the outside world (the resolver, the
//! filesystem, the environment) return a [`Result`]. Violating a documented
//! precondition of the pure address and mask operations is a programmer
//! error and panics instead; those functions carry `# Panics` sections
//! rather than error variants.
//!
//! ## Error Categories
//! - **Resolution Errors**: Forward and reverse lookup failures
//! - **Configuration Errors**: Unreadable or invalid configuration input
//!
//! All errors implement `std::error::Error` for interoperability.
//!
//! ## Example Usage
//! ```rust
//! use netaddr_core::error::{AddressError, Result};
//! use tracing::warn;
//!
//! fn port_from(service: &str) -> Result<u16> {
//!     service
//!         .parse()
//!         .map_err(|_| AddressError::Config(format!("not a port number: {service}")))
//! }
//!
//! match port_from("655") {
//!     Ok(port) => assert_eq!(port, 655),
//!     Err(e) => warn!(error = %e, "bad service string"),
//! }
//! ```

use thiserror::Error;

// AddressError is the primary error type for all resolver-facing operations
#[derive(Error, Debug)]
pub enum AddressError {
    #[error("Error looking up {host} port {service}: {reason}")]
    Lookup {
        host: String,
        service: String,
        reason: String,
    },

    #[error("Error while looking up hostname: {0}")]
    ReverseLookup(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Results using AddressError
pub type Result<T> = std::result::Result<T, AddressError>;
