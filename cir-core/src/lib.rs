#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the cir-core crate.
//! [cir_core]: https://docs.rs/cir_core/latest/cir_core/index.html
//! [cir_sqlite]: https://docs.rs/cir_sqlite/latest/cir_sqlite/index.html
//! [cir_axum]: https://docs.rs/cir_axum/latest/cir_axum/index.html
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for Climate Impact Rating records.
///
/// This module contains the product record, its rating and footprint blocks,
/// the partial-update patch, and the validation rules every stored record
/// must satisfy.
///
/// The models are plain data with minimal logic, following the hexagonal
/// architecture: persistence and transport live in other crates.
pub mod models;

/// Interface traits for the record store.
///
/// This module contains the "ports" in the hexagonal architecture pattern.
///
/// These traits define the contract between the domain and the storage or
/// transport adapters without specifying implementation details, so the
/// backing store can be swapped without touching the HTTP layer.
pub mod ports;

/// Bulk import of seed records from a delimited text source.
///
/// This module parses a header-mapped CSV source into validated product
/// data, feeds it to a [`ports::ProductRepository`] at a fixed pace, and
/// provides the once-per-process provisioning routine that creates the
/// store and seeds it.
pub mod seed;
