//! # HTTP Adapter
//!
//! axum routes exposing the product store.
//!
//! # Endpoints
//!
//! - `GET /api/products?search=` - list, newest first
//! - `GET /api/products/stats/value` - total inventory value
//! - `POST /api/products` - create
//! - `PUT /api/products/:id` - partial update
//! - `DELETE /api/products/:id` - delete
//! - everything else - static assets

pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use error::{ApiError, ErrorBody};
pub use router::{app_router, product_routes};
pub use server::HttpServer;
