//! Product endpoint handlers.
//!
//! Handlers validate input completely before calling the store, so a
//! rejected request never has a side effect.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::{debug, info};

use super::error::ApiError;
use crate::domain::{input, Product, ProductId, SearchTerm};
use crate::port::ProductStore;

/// Response of the inventory value endpoint.
#[derive(Debug, Serialize)]
pub struct TotalValue {
    pub total: f64,
}

/// `GET /api/products?search=<text>`
///
/// The query string is read as raw pairs so repeated or unknown keys never
/// reject the request; the first `search` wins.
pub async fn list_products<S: ProductStore>(
    State(store): State<Arc<S>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let raw = params
        .iter()
        .find(|(key, _)| key == "search")
        .map(|(_, value)| value.as_str());
    let search = SearchTerm::parse(raw);
    let products = store.list(search.as_ref()).await?;
    debug!(
        count = products.len(),
        search = ?search.as_ref().map(SearchTerm::as_str),
        "listed products"
    );
    Ok(Json(products))
}

/// `GET /api/products/stats/value`
pub async fn total_value<S: ProductStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<TotalValue>, ApiError> {
    let total = store.total_value().await?;
    Ok(Json(TotalValue { total }))
}

/// `POST /api/products`
pub async fn create_product<S: ProductStore>(
    State(store): State<Arc<S>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let body = input::parse_object(&body)?;
    let product = input::new_product(&body)?;

    let created = store.create(&product).await?;
    info!(id = %created.id, name = %created.name, "product created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/products/:id`
pub async fn update_product<S: ProductStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Product>, ApiError> {
    let id = ProductId::parse(&id).ok_or(ApiError::NotFound)?;
    let body = input::parse_object(&body)?;
    let update = input::product_update(&body)?;

    let updated = store.update(id, &update).await?.ok_or(ApiError::NotFound)?;
    info!(id = %id, fields = ?update.fields(), "product updated");
    Ok(Json(updated))
}

/// `DELETE /api/products/:id`
pub async fn delete_product<S: ProductStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = ProductId::parse(&id).ok_or(ApiError::NotFound)?;

    if !store.delete(id).await? {
        return Err(ApiError::NotFound);
    }
    info!(id = %id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}
