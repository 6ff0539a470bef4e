//! Route table.

use std::path::Path;
use std::sync::Arc;

use axum::routing::{get, put};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handler::{create_product, delete_product, list_products, total_value, update_product};
use crate::port::ProductStore;

/// Product routes, relative to the `/api` prefix.
pub fn product_routes<S>(store: Arc<S>) -> Router
where
    S: ProductStore + 'static,
{
    Router::new()
        .route(
            "/products",
            get(list_products::<S>).post(create_product::<S>),
        )
        .route("/products/stats/value", get(total_value::<S>))
        .route(
            "/products/:id",
            put(update_product::<S>).delete(delete_product::<S>),
        )
        .with_state(store)
}

/// Full application router: `/api` routes, static assets for everything else,
/// and request tracing.
pub fn app_router<S>(store: Arc<S>, static_dir: impl AsRef<Path>) -> Router
where
    S: ProductStore + 'static,
{
    Router::new()
        .nest("/api", product_routes(store))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
}
