//! Application configuration management.
//!
//! This module handles loading and merging configuration from multiple sources
//! with a clear precedence order. Configuration can come from default values,
//! configuration files, and environment variables.

use crate::Cli;
use cir_core::seed::SeedConfig;
use serde::{Deserialize, Serialize};

/// The main application configuration that composes all component configs
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Web server configuration (bind address and route prefix)
    #[serde(default)]
    pub server: cir_axum::config::AxumConfig,

    /// Database configuration (file path, pool settings)
    #[serde(default)]
    pub database: cir_sqlite::config::SqliteConfig,

    /// Seed import run when the store is first created
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given by the CLI
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `CIR_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Keep the store in a file
    /// export CIR_DATABASE__DATABASE_PATH="/data/cir.db"
    ///
    /// # Set server bind address
    /// export CIR_SERVER__BIND_ADDRESS="0.0.0.0:3000"
    ///
    /// # Slow the seed import down
    /// export CIR_SEED__PACE="1s"
    /// ```
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = &cli.config {
            if !path.exists() {
                anyhow::bail!("Config file {} does not exist", path.display());
            }
            config = config.add_source(config::File::from(path.as_path()));
        }

        // This maps CIR_SERVER__BIND_ADDRESS to server.bind_address
        config = config.add_source(
            config::Environment::with_prefix("CIR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Ok(config.build()?.try_deserialize()?)
    }
}
