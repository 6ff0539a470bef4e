//! Database connection management using Diesel ORM.
//!
//! Connections are opened per operation and closed on drop; there is no pool.
//! Both functions block the calling thread and belong on a blocking task.

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Open a new connection to the given PostgreSQL connection string.
///
/// Accepts both `postgres://` URLs and libpq `key=value` strings.
///
/// # Errors
/// Returns [`Error::Connection`] if the server cannot be reached or rejects
/// the credentials.
pub fn acquire_connection(database_url: &str) -> Result<PgConnection> {
    PgConnection::establish(database_url).map_err(|e| Error::Connection(e.to_string()))
}

/// Create the products table and its indexes if they do not exist.
///
/// Safe to call on every startup.
///
/// # Errors
/// Returns an error if the database is unreachable or a migration fails.
pub fn ensure_schema(database_url: &str) -> Result<()> {
    let mut conn = acquire_connection(database_url)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Migration(e.to_string()))?;

    if applied.is_empty() {
        debug!("schema already up to date");
    } else {
        info!(count = applied.len(), "applied schema migrations");
    }
    Ok(())
}
