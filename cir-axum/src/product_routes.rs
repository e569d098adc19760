//! REST API endpoints for product operations.
//!
//! Products are addressed by their barcode, which doubles as the record
//! identifier. Every handler performs exactly one repository operation and
//! translates its outcome into a status code.

use crate::ApiApplication;
use aide::{
    axum::{ApiRouter, routing::get_with},
    transform::TransformOperation,
};
use axum::http::StatusCode;
use cir_core::{models::ProductId, ports::ProductFailure};
use std::fmt::Display;
use tracing::{Level, event};

mod crud;
use crud::*;

mod list;
use list::*;

/// Path parameter for product-specific endpoints.
#[derive(serde::Deserialize, schemars::JsonSchema)]
#[schemars(inline)]
struct Id {
    /// The barcode of the product
    product_id: ProductId,
}

/// Creates a router with product-related endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route_with(
            "/",
            get_with(list_products::<T>, list_products_docs)
                .post_with(create_product::<T>, create_product_docs),
            |route| route.tag("product"),
        )
        .api_route_with(
            "/{product_id}",
            get_with(read_product::<T>, read_product_docs)
                .put_with(update_product::<T>, update_product_docs)
                .delete_with(delete_product::<T>, delete_product_docs),
            |route| route.tag("product"),
        )
}

/// Translate a domain failure into a response.
fn rejection(product_id: &ProductId, failure: ProductFailure) -> (StatusCode, String) {
    match failure {
        ProductFailure::NotFound => (
            StatusCode::NOT_FOUND,
            format!("Product {product_id} not registered"),
        ),
        ProductFailure::AlreadyExists => (
            StatusCode::CONFLICT,
            format!("Product {product_id} already registered"),
        ),
        ProductFailure::Invalid(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
    }
}

/// Log a store failure and hide its details from the client.
fn unavailable(err: impl Display, action: &str) -> (StatusCode, String) {
    event!(Level::ERROR, err = err.to_string());
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("failed to {action}"),
    )
}

fn list_products_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("List products")
        .description(
            r#"
            Return every registered product. With `barcode_id`, return only
            the product with that barcode: a one-element list, or an empty
            list if it is not registered.
            "#,
        )
        .response_with::<500, String, _>(|res| res.description("Database query failed"))
}

fn create_product_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Register a product")
        .description(
            r#"
            Register a new product. Its barcode becomes its identifier and
            cannot be changed later.
            "#,
        )
        .response_with::<409, String, _>(|res| res.description("Barcode already registered"))
        .response_with::<422, String, _>(|res| res.description("Invalid product data"))
        .response_with::<500, String, _>(|res| res.description("Database operation failed"))
}

fn read_product_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Get a product")
        .response_with::<404, String, _>(|res| res.description("Product not registered"))
        .response_with::<500, String, _>(|res| res.description("Database query failed"))
}

fn update_product_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Update a product")
        .description(
            r#"
            Overwrite the fields present in the body, leaving every other
            field as stored. A nested object such as `rating` is replaced as
            a whole. The barcode cannot be changed.
            "#,
        )
        .response_with::<404, String, _>(|res| res.description("Product not registered"))
        .response_with::<422, String, _>(|res| res.description("Invalid product data"))
        .response_with::<500, String, _>(|res| res.description("Database operation failed"))
}

fn delete_product_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Delete a product")
        .response_with::<404, String, _>(|res| res.description("Product not registered"))
        .response_with::<500, String, _>(|res| res.description("Database operation failed"))
}
