//! Infrastructure configuration modules.

pub mod database;
mod env;
pub mod logging;
pub mod server;
pub mod settings;

pub use database::{DatabaseConfig, SslMode};
pub use logging::LoggingConfig;
pub use server::ServerConfig;
pub use settings::Config;
