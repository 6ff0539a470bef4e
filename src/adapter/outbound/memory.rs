//! In-memory product store.
//!
//! Mirrors the PostgreSQL store's observable behavior (id assignment, newest
//! first ordering, case-insensitive literal search) without a database. Used
//! to exercise the HTTP layer in tests.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::domain::{NewProduct, Product, ProductId, ProductUpdate, SearchTerm};
use crate::error::Result;
use crate::port::ProductStore;

#[derive(Debug, Default)]
struct Inner {
    last_id: i32,
    products: BTreeMap<ProductId, Product>,
}

/// In-memory store for testing purposes.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    inner: RwLock<Inner>,
}

impl MemoryProductStore {
    /// Create a new empty memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProductStore for MemoryProductStore {
    async fn list(&self, search: Option<&SearchTerm>) -> Result<Vec<Product>> {
        let inner = self.inner.read();
        Ok(inner
            .products
            .values()
            .rev()
            .filter(|p| {
                search.map_or(true, |term| term.matches(&p.name) || term.matches(&p.category))
            })
            .cloned()
            .collect())
    }

    async fn total_value(&self) -> Result<f64> {
        let total: Decimal = self.inner.read().products.values().map(Product::value).sum();
        Ok(total.to_f64().unwrap_or_default())
    }

    async fn create(&self, product: &NewProduct) -> Result<Product> {
        let mut inner = self.inner.write();
        inner.last_id += 1;
        let created = product.clone().into_product(ProductId::new(inner.last_id));
        inner.products.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: ProductId, update: &ProductUpdate) -> Result<Option<Product>> {
        let mut inner = self.inner.write();
        Ok(inner.products.get_mut(&id).map(|product| {
            update.apply_to(product);
            product.clone()
        }))
    }

    async fn delete(&self, id: ProductId) -> Result<bool> {
        Ok(self.inner.write().products.remove(&id).is_some())
    }
}
