#![allow(dead_code)]

use cir_core::{
    models::{ProductData, Rating},
    ports::StoreRepository as _,
};
use cir_sqlite::{Db, config::SqliteConfig};

/// A fresh in-memory store with the product table created.
pub async fn provisioned_db() -> anyhow::Result<Db> {
    let db = Db::open(&SqliteConfig::default()).await?;
    db.create_store().await?;
    Ok(db)
}

pub fn product(barcode: &str) -> ProductData {
    ProductData {
        barcode: barcode.into(),
        kind: "appliance".into(),
        category: "washing machine".into(),
        model: "WM-8".into(),
        brand: "Acme".into(),
        rating: Some(Rating {
            efficiency: Some(1),
            energy: Some(3.6e9),
            co2: Some(240.0),
            other_greenhouse_gas: None,
            water: Some(9000.0),
            plastic: Some(12.5),
            lifetime: Some(10.0),
            recyclability: Some(3),
            repairability: Some(2),
        }),
        footprint: None,
    }
}

pub const RATING_SEED: &str = "\
type,brand,category,model,barcode,efficiency,production_energy,transport_energy,plastic,lifetime,water,recyclability,co2,other_ghg,repairability
appliance,Acme,kettle,K-200,5012345678900,2,1000,250,0.3,8,40,3,12.5,0.4,4
appliance,Acme,toaster,T-10,5012345678917,3,800,120,0.5,6,20,4,9.1,0.2,5
appliance,Bolt,fridge,F-1,5012345678924,1,9000,900,4.0,12,300,2,150,3.5,3
";

pub const FOOTPRINT_SEED: &str = "\
identifier,carbon_footprint,current_company,is_recyclable,production_stage,transportation_stage,retail_stage,date,description,previous_reference
FP-001,3.2,Green Goods,yes,2.0,0.8,0.4,2020-08-01,Oat drink 1l,
FP-002,1.1,Green Goods,no,0.7,0.3,0.1,2020-08-02,Oat drink 250ml,
FP-003,0.9,Field Farms,yes,,,,2020-08-03,Rye crackers,FP-000
";
