use std::future::Future;

mod product;
pub use product::{ProductFailure, ProductRepository};

/// Base repository trait defining the error type shared by all ports.
///
/// The error represents the store itself being unavailable or misbehaving.
/// Domain outcomes such as "not found" are reported separately, as the inner
/// value of each operation's result.
pub trait Repository: Sized {
    /// The error type for store operations
    type Error: std::error::Error + Send + Sync + 'static;
}

/// Lifecycle of the backing store.
///
/// The store is provisioned once per process by an explicit startup routine
/// (see [`crate::seed::provision`]); request handling never checks for it.
pub trait StoreRepository: Repository {
    /// Whether the product store has already been created.
    fn store_exists(&self) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Create the product store. Creating an existing store is a no-op.
    fn create_store(&self) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// The application as seen by the transport layer.
///
/// An application owns a single long-lived store handle, constructed once at
/// startup and handed to every request.
pub trait Application {
    /// The repository backing this application
    type Repository: ProductRepository;

    /// Access the shared store handle
    fn database(&self) -> &Self::Repository;
}
