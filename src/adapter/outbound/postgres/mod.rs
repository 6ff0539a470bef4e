//! PostgreSQL persistence adapter.
//!
//! Provides connection acquisition, schema initialization, and the
//! Diesel-backed [`PgProductStore`](store::PgProductStore).

pub mod database;
pub mod store;

pub use database::connection::{acquire_connection, ensure_schema};
pub use store::PgProductStore;
