//! Configuration types for the SQLite document store.
//!
//! The store is opened once at startup from this configuration, and the
//! resulting handle is shared by every request.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the SQLite document store.
///
/// # Examples
///
/// ```
/// use cir_sqlite::config::SqliteConfig;
/// use std::path::PathBuf;
///
/// // In-memory store (default), gone when the process exits
/// let config = SqliteConfig::default();
///
/// // File-backed store
/// let config = SqliteConfig {
///     database_path: Some(PathBuf::from("cir.db")),
///     create_if_missing: true,
///     max_readers: Some(8),
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SqliteConfig {
    /// Database file path. If None, uses an in-memory database
    pub database_path: Option<PathBuf>,

    /// Whether to create the database file if it doesn't exist
    #[serde(default = "default_true")]
    pub create_if_missing: bool,

    /// Upper bound on concurrent read connections. If None, the sqlx default applies
    #[serde(default)]
    pub max_readers: Option<u32>,
}

fn default_true() -> bool {
    true
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            create_if_missing: true,
            max_readers: None,
        }
    }
}
