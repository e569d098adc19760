use crate::{
    models::{ProductData, ProductId},
    ports::{ProductFailure, ProductRepository},
};
use std::time::Duration;
use tokio::time::{Instant, sleep_until};
use tracing::{Instrument as _, Level, event, span};

/// An import that stopped before reaching the end of its source.
///
/// Nothing is rolled back: the first `imported` rows are stored, and the
/// import can be resumed by skipping that many rows.
#[derive(Debug, thiserror::Error)]
pub enum ImportError<E: std::error::Error + Send + Sync + 'static> {
    /// The repository refused a row
    #[error("import aborted after {imported} records: product {barcode} was rejected")]
    Rejected {
        /// Rows stored before the failure
        imported: usize,
        /// The identifier of the rejected row
        barcode: ProductId,
        /// Why the row was rejected
        #[source]
        failure: ProductFailure,
    },

    /// The store failed mid-import
    #[error("import aborted after {imported} records: store unavailable")]
    Store {
        /// Rows stored before the failure
        imported: usize,
        /// The store error
        #[source]
        source: E,
    },
}

impl<E: std::error::Error + Send + Sync + 'static> ImportError<E> {
    /// How many rows were stored before the import stopped.
    pub fn imported(&self) -> usize {
        match self {
            ImportError::Rejected { imported, .. } | ImportError::Store { imported, .. } => {
                *imported
            }
        }
    }
}

/// Create every row in order, starting successive creates at least `pace` apart.
///
/// The import is sequential and deliberately throughput-capped. The first
/// failing create aborts the rest.
///
/// # Returns
///
/// The number of records created.
pub async fn import_products<R, I>(
    db: &R,
    rows: I,
    pace: Duration,
) -> Result<usize, ImportError<R::Error>>
where
    R: ProductRepository,
    I: IntoIterator<Item = ProductData>,
{
    let span = span!(Level::INFO, "import", pace = ?pace);
    async move {
        let mut imported = 0;
        let mut next_slot = Instant::now();

        for data in rows {
            sleep_until(next_slot).await;
            next_slot = Instant::now() + pace;

            let barcode = data.barcode.clone();
            match db.create_product(data).await {
                Ok(Ok(_)) => {
                    imported += 1;
                    event!(Level::DEBUG, barcode = barcode.as_str(), imported);
                }
                Ok(Err(failure)) => {
                    event!(
                        Level::ERROR,
                        barcode = barcode.as_str(),
                        imported,
                        err = failure.to_string()
                    );
                    return Err(ImportError::Rejected {
                        imported,
                        barcode,
                        failure,
                    });
                }
                Err(source) => {
                    event!(Level::ERROR, imported, err = source.to_string());
                    return Err(ImportError::Store { imported, source });
                }
            }
        }

        event!(Level::INFO, imported, "seed import complete");
        Ok(imported)
    }
    .instrument(span)
    .await
}
