#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the cir-sqlite crate.
//! [cir_core]: https://docs.rs/cir_core/latest/cir_core/index.html
//! [cir_axum]: https://docs.rs/cir_axum/latest/cir_axum/index.html
//! [cir_sqlite]: https://docs.rs/cir_sqlite/latest/cir_sqlite/index.html
#![doc = include_str!("../README.md")]

use sqlx::sqlite;
use std::{str::FromStr, time::Duration};
use tokio::try_join;
use tracing::{Level, event};

pub mod config;
mod r#impl;

use config::SqliteConfig;

/// SQLite document store for CIR product records.
///
/// This struct provides separate reader and writer connection pools to a SQLite database,
/// implementing the repository traits defined in `cir-core`. Clones share the same pools,
/// so one `Db` opened at startup serves every request.
///
/// # Connection Management
///
/// - `reader`: A connection pool for read operations, allowing concurrent reads
/// - `writer`: A single-connection pool for write operations, ensuring serialized writes
///
/// # Example
///
/// ```no_run
/// # use cir_sqlite::{Db, config::SqliteConfig};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SqliteConfig::default();
/// let db = Db::open(&config).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Db {
    /// Connection pool for read operations
    pub reader: sqlx::Pool<sqlx::Sqlite>,
    /// Connection pool for write operations (limited to 1 connection)
    pub writer: sqlx::Pool<sqlx::Sqlite>,
}

impl Db {
    /// Open a connection to the specified SQLite database.
    ///
    /// Creates the database file if it doesn't exist (when `create_if_missing` is true),
    /// but not the product store inside it: that is the job of
    /// [`StoreRepository::create_store`](cir_core::ports::StoreRepository::create_store),
    /// called once by the provisioning routine.
    ///
    /// # Database Configuration
    ///
    /// - WAL mode for better concurrency
    /// - a 5 second busy timeout, so the writer waits on readers instead of failing
    /// - without a `database_path`, connections are never retired, so the
    ///   in-memory store lasts as long as the `Db`
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the connection fails.
    pub async fn open(config: &SqliteConfig) -> Result<Self, sqlx::Error> {
        let db_path = config
            .database_path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned());

        let options =
            sqlite::SqliteConnectOptions::from_str(db_path.as_deref().unwrap_or(":memory:"))?
                .busy_timeout(Duration::from_secs(5))
                .journal_mode(sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlite::SqliteSynchronous::Normal)
                .pragma("temp_store", "memory")
                .create_if_missing(config.create_if_missing);

        // An in-memory database lives only as long as its last connection
        let in_memory = db_path.is_none();
        let reader = match config.max_readers {
            Some(n) => pool_options(in_memory).max_connections(n),
            None => pool_options(in_memory),
        }
        .connect_with(options.clone());
        let writer = pool_options(in_memory)
            .max_connections(1)
            .connect_with(options);

        let (reader, writer) = try_join!(reader, writer)?;
        event!(
            Level::INFO,
            path = db_path.as_deref().unwrap_or(":memory:"),
            "opened SQLite store"
        );

        Ok(Self { reader, writer })
    }
}

fn pool_options(in_memory: bool) -> sqlite::SqlitePoolOptions {
    let options = sqlite::SqlitePoolOptions::new();
    if in_memory {
        options
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        options
    }
}
