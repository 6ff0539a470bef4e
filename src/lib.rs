//! Stocktake - a small inventory-tracking HTTP service.
//!
//! Products (name, category, quantity, price) live in one PostgreSQL table and
//! are exposed through a JSON API with list/search, create, partial update,
//! delete, and a total inventory value aggregate.
//!
//! # Architecture
//!
//! The crate is laid out hexagonally:
//!
//! - **`domain`** - Product types and pure input validation
//! - **`port`** - The [`ProductStore`](port::ProductStore) trait
//! - **`adapter`** - axum HTTP handlers (inbound); PostgreSQL and in-memory
//!   stores (outbound)
//! - **`infrastructure`** - Configuration, logging, and startup wiring
//!
//! # Modules
//!
//! - [`domain`] - Storage-agnostic product logic
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait definitions implemented by adapters
//! - [`adapter`] - HTTP, PostgreSQL, and memory adapters
//! - [`infrastructure`] - Config loading and the composition root
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use stocktake::adapter::inbound::http::app_router;
//! use stocktake::adapter::outbound::memory::MemoryProductStore;
//!
//! let router = app_router(Arc::new(MemoryProductStore::new()), "static");
//! ```

pub mod adapter;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
