#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the cir-server crate.
//! [cir_axum]: https://docs.rs/cir_axum/latest/cir_axum/index.html
//! [cir_sqlite]: https://docs.rs/cir_sqlite/latest/cir_sqlite/index.html
#![doc = include_str!("../README.md")]

pub mod impls;

mod cli;
pub use cli::{Cli, Commands};

mod commands;
pub use commands::{import_file, provision_store};

mod config;
pub use config::AppConfig;
