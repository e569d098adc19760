use crate::models::{ProductData, ProductId, ProductPatch, ProductRecord, ValidationError};
use std::future::Future;

/// ProductRepository methods report domain outcomes through this type. If a
/// create targets an identifier that is already stored, it must fail with
/// `AlreadyExists`, never with `NotFound`.
#[derive(Debug, thiserror::Error)]
pub enum ProductFailure {
    /// The identifier does not resolve to any record
    #[error("product not registered")]
    NotFound,
    /// A record with this identifier already exists
    #[error("product already registered")]
    AlreadyExists,
    /// The document does not satisfy the record invariants
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Repository interface for CIR product records.
///
/// The record's barcode is its primary key: `create_product` stores the data
/// under `data.barcode` verbatim, and every lookup is an exact key lookup.
pub trait ProductRepository: super::Repository {
    /// Enumerate every stored record, in store order.
    fn list_products(
        &self,
    ) -> impl Future<Output = Result<Vec<ProductRecord>, Self::Error>> + Send;

    /// Get the record stored under `product_id`.
    fn get_product(
        &self,
        product_id: &ProductId,
    ) -> impl Future<Output = Result<Result<ProductRecord, ProductFailure>, Self::Error>> + Send;

    /// Validate and store a new record keyed by its barcode.
    fn create_product(
        &self,
        data: ProductData,
    ) -> impl Future<Output = Result<Result<ProductRecord, ProductFailure>, Self::Error>> + Send;

    /// Merge `patch` into the stored record and persist the result.
    ///
    /// Fields absent from the patch are untouched; the merged record is
    /// validated before it is written.
    fn update_product(
        &self,
        product_id: &ProductId,
        patch: ProductPatch,
    ) -> impl Future<Output = Result<Result<ProductRecord, ProductFailure>, Self::Error>> + Send;

    /// Remove the stored record, returning what was removed.
    fn delete_product(
        &self,
        product_id: &ProductId,
    ) -> impl Future<Output = Result<Result<ProductRecord, ProductFailure>, Self::Error>> + Send;
}
