//! The startup work behind each subcommand.

use anyhow::Context as _;
use cir_core::{
    ports::{ProductRepository, StoreRepository},
    seed::{ProvisionError, Provisioned, SeedConfig, SeedSource, import_products, provision},
};
use std::{path::Path, time::Duration};
use tracing::{Level, event};

/// Provision the store before serving.
///
/// A seed import that stops part way is reported together with the command
/// that resumes it.
pub async fn provision_store<R>(db: &R, seed: &SeedConfig) -> anyhow::Result<Provisioned>
where
    R: StoreRepository + ProductRepository,
{
    match provision(db, seed).await {
        Ok(provisioned) => Ok(provisioned),
        Err(ProvisionError::Import(err)) => {
            let resume = resume_hint(seed.path.as_deref(), err.imported());
            Err(anyhow::Error::new(err).context(resume))
        }
        Err(err) => Err(err.into()),
    }
}

/// Import `file` into the store, skipping its first `skip` data rows.
///
/// The store is created if it does not exist yet. Returns the number of
/// records created by this run.
pub async fn import_file<R>(
    db: &R,
    file: &Path,
    skip: usize,
    pace: Duration,
) -> anyhow::Result<usize>
where
    R: StoreRepository + ProductRepository,
{
    let source = SeedSource::load(file)
        .await
        .with_context(|| format!("failed to load {}", file.display()))?;

    if !db.store_exists().await? {
        db.create_store().await?;
        event!(Level::INFO, "created product store");
    }

    event!(
        Level::INFO,
        rows = source.len(),
        skip,
        layout = ?source.layout(),
        "importing {}",
        file.display()
    );

    import_products(db, source.into_rows().into_iter().skip(skip), pace)
        .await
        .map_err(|err| {
            let resume = resume_hint(Some(file), skip + err.imported());
            anyhow::Error::new(err).context(resume)
        })
}

fn resume_hint(file: Option<&Path>, rows: usize) -> String {
    let file = file.map_or_else(|| "<FILE>".into(), |path| path.display().to_string());
    format!("seed import stopped; resume with `cir-server import {file} --skip {rows}`")
}
