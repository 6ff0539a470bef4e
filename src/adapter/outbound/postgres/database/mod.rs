//! PostgreSQL database modules.
//!
//! Provides connection management, schema definitions, and Diesel model
//! types for the products table.

pub mod connection;
pub mod model;
pub mod schema;
