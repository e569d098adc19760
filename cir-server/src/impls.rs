//! The concrete application served by the binary.

use cir_core::ports::Application;
use cir_sqlite::Db;

/// The CIR service: one SQLite store shared by every request.
#[derive(Clone)]
pub struct CirApp {
    /// The store handle, opened and provisioned once at startup
    pub db: Db,
}

impl Application for CirApp {
    type Repository = Db;

    fn database(&self) -> &Self::Repository {
        &self.db
    }
}
