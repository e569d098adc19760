use super::{ImportError, SeedConfig, SeedError, SeedSource, import_products};
use crate::ports::{ProductRepository, StoreRepository};
use tracing::{Level, event};

/// The outcome of provisioning the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioned {
    /// The store was already present; nothing was imported
    Existing,
    /// The store was created and seeded with this many records
    Created {
        /// Records imported from the seed source
        imported: usize,
    },
}

/// A failure while provisioning the store.
#[derive(Debug, thiserror::Error)]
pub enum ProvisionError<E: std::error::Error + Send + Sync + 'static> {
    /// The store could not be inspected or created
    #[error("failed to provision the product store")]
    Store(#[source] E),

    /// The seed source could not be loaded
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// The seed import stopped part way
    #[error(transparent)]
    Import(#[from] ImportError<E>),
}

/// Ensure the product store exists, seeding it when it is first created.
///
/// Call this once per process, before serving requests. Against an existing
/// store it does nothing, so the seed import runs at most once per store. The
/// seed source is parsed before the store is created, so a malformed source
/// leaves the store absent and the next start tries again.
pub async fn provision<R>(
    db: &R,
    config: &SeedConfig,
) -> Result<Provisioned, ProvisionError<R::Error>>
where
    R: StoreRepository + ProductRepository,
{
    if db.store_exists().await.map_err(ProvisionError::Store)? {
        event!(Level::INFO, "product store already provisioned");
        return Ok(Provisioned::Existing);
    }

    let source = match &config.path {
        Some(path) => Some(SeedSource::load(path).await?),
        None => None,
    };

    db.create_store().await.map_err(ProvisionError::Store)?;
    event!(Level::INFO, "created product store");

    let imported = match source {
        Some(source) => {
            event!(
                Level::INFO,
                rows = source.len(),
                layout = ?source.layout(),
                "importing seed data"
            );
            import_products(db, source.into_rows(), config.pace).await?
        }
        None => 0,
    };

    Ok(Provisioned::Created { imported })
}
