//! Repository trait implementations for the SQLite database.
//!
//! This module contains the implementations of the repository traits defined in
//! `cir-core` for the SQLite document store.

use crate::Db;
use cir_core::ports::{Repository, StoreRepository};

mod product;

impl Repository for Db {
    type Error = sqlx::Error;
}

impl StoreRepository for Db {
    async fn store_exists(&self) -> Result<bool, Self::Error> {
        sqlx::query_scalar::<_, bool>(
            r#"
            select exists (
                select
                    1
                from
                    sqlite_master
                where
                    type = 'table'
                and
                    name = 'product'
            )
            "#,
        )
        .fetch_one(&self.writer)
        .await
    }

    async fn create_store(&self) -> Result<(), Self::Error> {
        // Applied migrations are recorded, so running this twice is harmless
        sqlx::migrate!("./schema").run(&self.writer).await?;
        Ok(())
    }
}
