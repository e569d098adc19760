use super::{rejection, unavailable};
use crate::ApiApplication;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use cir_core::{
    models::{ProductId, ProductRecord},
    ports::{ProductFailure, ProductRepository as _},
};

/// Query parameters for listing products.
#[derive(serde::Deserialize, schemars::JsonSchema)]
#[schemars(inline)]
pub(crate) struct ListQuery {
    /// Only return the product with this barcode
    #[serde(default, alias = "barcode")]
    barcode_id: Option<ProductId>,
}

pub(crate) async fn list_products<T: ApiApplication>(
    State(app): State<T>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ProductRecord>>, (StatusCode, String)> {
    let db = app.database();

    let Some(product_id) = query.barcode_id else {
        return db
            .list_products()
            .await
            .map(Json)
            .map_err(|err| unavailable(err, "list products"));
    };

    // The barcode is the key, so filtering is a plain lookup
    match db
        .get_product(&product_id)
        .await
        .map_err(|err| unavailable(err, &format!("get product {product_id}")))?
    {
        Ok(record) => Ok(Json(vec![record])),
        Err(ProductFailure::NotFound) => Ok(Json(Vec::new())),
        Err(failure) => Err(rejection(&product_id, failure)),
    }
}
