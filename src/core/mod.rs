//! # Core Address Components
//!
//! Canonical address model and subnet-mask bit arithmetic.
//!
//! This module provides the foundation for routing and subnet matching:
//! a tagged address representation with a total order, and prefix
//! operations over raw address octets.
//!
//! ## Components
//! - **Address**: Family-tagged socket address with normalization and ordering
//! - **Mask**: Prefix-length operations over big-endian octet buffers
//!
//! ## Prefix Layout
//! ```text
//! [Full network bytes (bits / 8)] [Boundary byte] [Host bytes (zeroed)]
//!                                  ^ top (bits % 8) bits kept
//! ```
//!
//! ## Contract
//! - Address octets are network order; the most significant byte compares first
//! - Prefix lengths are validated against the buffer width before any bit work
//! - Host bits never influence a masked comparison

pub mod address;
pub mod mask;
