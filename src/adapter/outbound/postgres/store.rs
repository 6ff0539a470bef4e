//! PostgreSQL product store implementation.
//!
//! Every operation opens its own connection on a blocking task, issues a
//! single statement, and drops the connection before returning.

use std::sync::Arc;

use diesel::pg::PgConnection;
use diesel::prelude::*;

use super::database::connection::acquire_connection;
use super::database::model::{NewProductRow, ProductChangeset, ProductRow, TotalValueRow};
use super::database::schema::products;
use crate::domain::{NewProduct, Product, ProductId, ProductUpdate, SearchTerm};
use crate::error::{Error, Result};
use crate::port::ProductStore;

const TOTAL_VALUE_SQL: &str =
    "SELECT COALESCE(SUM(quantity * price), 0)::float8 AS total FROM products";

/// PostgreSQL-backed product store.
///
/// Implements the [`ProductStore`] trait. Cloning is cheap; clones share the
/// connection string.
#[derive(Debug, Clone)]
pub struct PgProductStore {
    /// libpq connection string used for every connection.
    database_url: Arc<str>,
}

impl PgProductStore {
    /// Create a store that connects with the given connection string.
    #[must_use]
    pub fn new(database_url: impl Into<Arc<str>>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    /// Run `op` on a fresh connection inside `spawn_blocking`.
    async fn with_connection<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut PgConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let database_url = Arc::clone(&self.database_url);
        tokio::task::spawn_blocking(move || {
            let mut conn = acquire_connection(&database_url)?;
            op(&mut conn)
        })
        .await?
    }
}

impl ProductStore for PgProductStore {
    async fn list(&self, search: Option<&SearchTerm>) -> Result<Vec<Product>> {
        let pattern = search.map(SearchTerm::like_pattern);

        let rows = self
            .with_connection(move |conn| {
                let mut query = products::table
                    .select(ProductRow::as_select())
                    .order(products::id.desc())
                    .into_boxed();
                if let Some(pattern) = pattern {
                    query = query.filter(
                        products::name
                            .ilike(pattern.clone())
                            .or(products::category.ilike(pattern)),
                    );
                }
                query
                    .load::<ProductRow>(conn)
                    .map_err(|e| Error::Database(e.to_string()))
            })
            .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn total_value(&self) -> Result<f64> {
        let row = self
            .with_connection(|conn| {
                diesel::sql_query(TOTAL_VALUE_SQL)
                    .get_result::<TotalValueRow>(conn)
                    .map_err(|e| Error::Database(e.to_string()))
            })
            .await?;

        Ok(row.total)
    }

    async fn create(&self, product: &NewProduct) -> Result<Product> {
        let product = product.clone();

        let row = self
            .with_connection(move |conn| {
                diesel::insert_into(products::table)
                    .values(NewProductRow::from(&product))
                    .returning(ProductRow::as_returning())
                    .get_result(conn)
                    .map_err(|e| Error::Database(e.to_string()))
            })
            .await?;

        Ok(Product::from(row))
    }

    async fn update(&self, id: ProductId, update: &ProductUpdate) -> Result<Option<Product>> {
        let update = update.clone();

        let row = self
            .with_connection(move |conn| {
                diesel::update(products::table.find(id.get()))
                    .set(ProductChangeset::from(&update))
                    .returning(ProductRow::as_returning())
                    .get_result(conn)
                    .optional()
                    .map_err(|e| Error::Database(e.to_string()))
            })
            .await?;

        Ok(row.map(Product::from))
    }

    async fn delete(&self, id: ProductId) -> Result<bool> {
        let deleted = self
            .with_connection(move |conn| {
                diesel::delete(products::table.find(id.get()))
                    .execute(conn)
                    .map_err(|e| Error::Database(e.to_string()))
            })
            .await?;

        Ok(deleted > 0)
    }
}
