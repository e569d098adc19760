//! Configuration for the startup seed import.

use std::{path::PathBuf, time::Duration};

/// The default spacing between successive creates during an import.
///
/// Keeps the import under ten writes per second.
pub const DEFAULT_PACE: Duration = Duration::from_millis(150);

/// Configuration for seeding a freshly created store.
///
/// # Examples
///
/// ```
/// use cir_core::seed::{DEFAULT_PACE, SeedConfig};
/// use std::path::PathBuf;
///
/// // No seed data (default)
/// let config = SeedConfig::default();
/// assert_eq!(config.pace, DEFAULT_PACE);
///
/// // Seed from a file, with the default pacing
/// let config = SeedConfig {
///     path: Some(PathBuf::from("dummy-data.txt")),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeedConfig {
    /// Seed source imported when the store is created. If None, the store starts empty
    #[cfg_attr(feature = "serde", serde(default))]
    pub path: Option<PathBuf>,

    /// Minimum spacing between successive creates
    #[cfg_attr(
        feature = "serde",
        serde(default = "default_pace", with = "humantime_serde")
    )]
    pub pace: Duration,
}

#[cfg(feature = "serde")]
fn default_pace() -> Duration {
    DEFAULT_PACE
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            path: None,
            pace: DEFAULT_PACE,
        }
    }
}
