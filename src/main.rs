use stocktake::infrastructure::{bootstrap, Config};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.server.socket_addr(),
        database = ?config.database,
        "stocktake starting"
    );

    tokio::select! {
        result = bootstrap::run(config) => {
            if let Err(e) = result {
                error!(error = %e, "server exited");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("stocktake stopped");
}
