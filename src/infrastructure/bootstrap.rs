//! Composition root: wire configuration, storage, and the HTTP server.

use std::sync::Arc;

use tracing::info;

use crate::adapter::inbound::http::HttpServer;
use crate::adapter::outbound::postgres::{ensure_schema, PgProductStore};
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Prepare the schema, then serve until the listener fails or the future is
/// dropped.
///
/// Schema initialization runs before the listener is bound, so a database
/// that cannot be reached keeps the server from accepting any traffic.
///
/// # Errors
///
/// Returns an error if the schema cannot be created or the server fails.
pub async fn run(config: Config) -> Result<()> {
    let database_url = config.database.connection_string();

    let schema_url = database_url.clone();
    tokio::task::spawn_blocking(move || ensure_schema(&schema_url)).await??;
    info!("database schema ready");

    let store = Arc::new(PgProductStore::new(database_url));
    HttpServer::new(config.server, store).start().await
}
