//! Configuration types for the Axum HTTP server.
//!
//! This module provides the network binding and the version prefix under
//! which the product routes are mounted.

use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};

/// Configuration for the Axum HTTP server.
///
/// # Examples
///
/// ```
/// use cir_axum::config::AxumConfig;
///
/// // Use default configuration
/// let config = AxumConfig::default();
/// assert_eq!(config.api_prefix, "/v1");
///
/// // Custom configuration
/// let config = AxumConfig {
///     bind_address: "127.0.0.1:3000".parse().unwrap(),
///     api_prefix: "/v2".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AxumConfig {
    /// The address to bind the server to
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// Version prefix for the product routes
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080))
}

fn default_api_prefix() -> String {
    "/v1".to_string()
}

impl AxumConfig {
    /// The mount point of the product routes, e.g. `/v1/product`.
    pub fn product_path(&self) -> String {
        format!("{}/product", self.api_prefix.trim_end_matches('/'))
    }
}

impl Default for AxumConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            api_prefix: default_api_prefix(),
        }
    }
}
