use axum_test::TestServer;
use cir_axum::{config::AxumConfig, router};
use cir_core::ports::{Application, StoreRepository as _};
use cir_sqlite::{Db, config::SqliteConfig};
use serde_json::{Value, json};

#[derive(Clone)]
pub struct TestApp(pub Db);

impl Application for TestApp {
    type Repository = Db;

    fn database(&self) -> &Self::Repository {
        &self.0
    }
}

/// A server over a fresh, provisioned in-memory store.
pub async fn server() -> (TestServer, Db) {
    let (server, db) = unprovisioned_server().await;
    db.create_store().await.unwrap();
    (server, db)
}

/// A server whose store was never created, so every operation fails.
pub async fn unprovisioned_server() -> (TestServer, Db) {
    let db = Db::open(&SqliteConfig::default()).await.unwrap();
    let app = TestApp(db.clone());
    let server = TestServer::new(router(app, &AxumConfig::default())).unwrap();
    (server, db)
}

pub fn kettle(barcode: &str) -> Value {
    json!({
        "barcode": barcode,
        "type": "appliance",
        "category": "kettle",
        "model": "K-200",
        "brand": "Acme",
        "rating": {
            "efficiency": 2,
            "energy": 1250.0,
            "co2": 12.5,
            "water": 40.0,
            "plastic": 0.3,
            "lifetime": 8.0,
            "recyclability": 3,
            "repairability": 4
        }
    })
}
