//! Persistence port for products.

use std::future::Future;

use crate::domain::{NewProduct, Product, ProductId, ProductUpdate, SearchTerm};
use crate::error::Result;

/// Storage operations for products.
///
/// Each call is independent; implementations hold no per-request state.
pub trait ProductStore: Send + Sync {
    /// All products, optionally filtered by search term, newest id first.
    fn list(&self, search: Option<&SearchTerm>)
        -> impl Future<Output = Result<Vec<Product>>> + Send;

    /// Sum of `quantity * price` over every product; `0.0` when empty.
    fn total_value(&self) -> impl Future<Output = Result<f64>> + Send;

    /// Insert a product and return it with its assigned id.
    fn create(&self, product: &NewProduct) -> impl Future<Output = Result<Product>> + Send;

    /// Apply all changes in one statement. `None` if the id does not exist.
    fn update(
        &self,
        id: ProductId,
        update: &ProductUpdate,
    ) -> impl Future<Output = Result<Option<Product>>> + Send;

    /// Delete by id. Returns whether a row was removed.
    fn delete(&self, id: ProductId) -> impl Future<Output = Result<bool>> + Send;
}
