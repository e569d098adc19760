mod config;
mod import;
mod layout;
mod provision;

pub use config::{DEFAULT_PACE, SeedConfig};
pub use import::{ImportError, import_products};
pub use layout::{SeedError, SeedLayout, SeedSource};
pub use provision::{ProvisionError, Provisioned, provision};
