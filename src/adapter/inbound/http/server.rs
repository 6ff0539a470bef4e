//! # HTTP Server
//!
//! Binds the listener and serves the application router.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use super::router::app_router;
use crate::error::Result;
use crate::infrastructure::config::ServerConfig;
use crate::port::ProductStore;

/// HTTP server for the inventory API.
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server serving `store` with the given configuration.
    pub fn new<S>(config: ServerConfig, store: Arc<S>) -> Self
    where
        S: ProductStore + 'static,
    {
        let router = app_router(store, &config.static_dir);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Bind and serve until the future is dropped or the listener fails.
    ///
    /// # Errors
    /// Returns an error if the address cannot be bound.
    pub async fn start(self) -> Result<()> {
        let listener =
            TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;
        let addr = listener.local_addr()?;

        info!(%addr, static_dir = %self.config.static_dir.display(), "listening");

        axum::serve(listener, self.router).await?;
        Ok(())
    }
}
