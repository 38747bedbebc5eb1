//! # Configuration Management
//!
//! Centralized configuration for address resolution and display.
//!
//! This module provides structured configuration for the two behaviors the
//! crate leaves to deployment policy: which address families a forward
//! lookup may return, and whether rendered addresses are resolved back to
//! names.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - TOML strings via `from_toml()`
//! - Environment variables via `from_env()` (prefix `NETADDR_`)
//! - Direct instantiation with defaults

use crate::core::address::AddrFamily;
use crate::error::{AddressError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Which address families a forward lookup may return.
///
/// This is a resolution policy, not an address property: a host with both
/// record types resolves to a filtered candidate list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyPreference {
    /// Accept both IPv4 and IPv6 candidates.
    #[default]
    Any,
    /// IPv4 candidates only.
    Ipv4,
    /// IPv6 candidates only.
    Ipv6,
}

impl FamilyPreference {
    /// Whether an address of the given family passes this preference.
    pub fn admits(self, family: AddrFamily) -> bool {
        match self {
            Self::Any => true,
            Self::Ipv4 => family == AddrFamily::V4,
            Self::Ipv6 => family == AddrFamily::V6,
        }
    }
}

/// Main configuration structure that contains all configurable settings
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct NetConfig {
    /// Resolution policy
    #[serde(default)]
    pub resolve: ResolveConfig,

    /// Display behavior
    #[serde(default)]
    pub display: DisplayConfig,
}

impl NetConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| AddressError::Config(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| AddressError::Config(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| AddressError::Config(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Start with defaults
        let mut config = Self::default();

        // Override with environment variables
        if let Ok(family) = std::env::var("NETADDR_ADDRESS_FAMILY") {
            match family.to_ascii_lowercase().as_str() {
                "any" => config.resolve.address_family = FamilyPreference::Any,
                "ipv4" => config.resolve.address_family = FamilyPreference::Ipv4,
                "ipv6" => config.resolve.address_family = FamilyPreference::Ipv6,
                _ => {}
            }
        }

        if let Ok(resolve_names) = std::env::var("NETADDR_RESOLVE_NAMES") {
            if let Ok(val) = resolve_names.parse::<bool>() {
                config.display.resolve_names = val;
            }
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation notes. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        // Resolving names does one DNS query per rendered address
        if self.display.resolve_names {
            errors.push(
                "WARNING: resolve_names performs a reverse lookup per rendered address - expect slower display paths"
                    .to_string(),
            );
        }

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AddressError::Config(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Resolution policy
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct ResolveConfig {
    /// Restrict forward lookups to one address family
    #[serde(default)]
    pub address_family: FamilyPreference,
}

/// Display behavior
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Resolve addresses back to names when rendering them for humans
    #[serde(default)]
    pub resolve_names: bool,
}
