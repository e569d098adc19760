use super::{Id, rejection, unavailable};
use crate::ApiApplication;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use cir_core::{
    models::{ProductData, ProductPatch, ProductRecord},
    ports::ProductRepository as _,
};

/// Register a new product.
///
/// # Returns
///
/// - `201 Created`: the stored record
/// - `409 Conflict`: the barcode is already registered
/// - `422 Unprocessable Entity`: the data failed validation
/// - `500 Internal Server Error`: Database operation failed
pub(crate) async fn create_product<T: ApiApplication>(
    State(app): State<T>,
    Json(product_data): Json<ProductData>,
) -> Result<(StatusCode, Json<ProductRecord>), (StatusCode, String)> {
    let db = app.database();
    let product_id = product_data.barcode.clone();

    db.create_product(product_data)
        .await
        .map_err(|err| unavailable(err, "create product"))?
        .map(|record| (StatusCode::CREATED, Json(record)))
        .map_err(|failure| rejection(&product_id, failure))
}

/// Retrieve a product's record.
///
/// # Returns
///
/// - `200 OK`: the record
/// - `404 Not Found`: Product does not exist
/// - `500 Internal Server Error`: Database query failed
pub(crate) async fn read_product<T: ApiApplication>(
    State(app): State<T>,
    Path(Id { product_id }): Path<Id>,
) -> Result<Json<ProductRecord>, (StatusCode, String)> {
    let db = app.database();

    db.get_product(&product_id)
        .await
        .map_err(|err| unavailable(err, &format!("get product {product_id}")))?
        .map(Json)
        .map_err(|failure| rejection(&product_id, failure))
}

/// Merge new field values into a product.
///
/// # Returns
///
/// - `200 OK`: the updated record
/// - `404 Not Found`: Product does not exist
/// - `422 Unprocessable Entity`: the merged data failed validation, or the
///   body tried to change the barcode
/// - `500 Internal Server Error`: Database operation failed
pub(crate) async fn update_product<T: ApiApplication>(
    State(app): State<T>,
    Path(Id { product_id }): Path<Id>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<ProductRecord>, (StatusCode, String)> {
    let db = app.database();

    db.update_product(&product_id, patch)
        .await
        .map_err(|err| unavailable(err, &format!("update product {product_id}")))?
        .map(Json)
        .map_err(|failure| rejection(&product_id, failure))
}

/// Remove a product.
///
/// # Returns
///
/// - `200 OK`: the removed record
/// - `404 Not Found`: Product does not exist
/// - `500 Internal Server Error`: Database operation failed
pub(crate) async fn delete_product<T: ApiApplication>(
    State(app): State<T>,
    Path(Id { product_id }): Path<Id>,
) -> Result<Json<ProductRecord>, (StatusCode, String)> {
    let db = app.database();

    db.delete_product(&product_id)
        .await
        .map_err(|err| unavailable(err, &format!("delete product {product_id}")))?
        .map(Json)
        .map_err(|failure| rejection(&product_id, failure))
}
