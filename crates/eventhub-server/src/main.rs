//! Eventhub server binary.
//!
//! Wires the event store to the HTTP API and serves it until the process
//! is asked to stop.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `eventhub-config.yaml` (or `EVENTHUB_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Provision the store container (`PostgreSQL` + migrations, or memory)
//! 4. Serve the API until `Ctrl-C` / `SIGTERM`
//! 5. Close the store

mod config;
mod error;

use std::path::PathBuf;
use std::sync::Arc;

use eventhub_api::{AppState, shutdown_signal, start_server};
use eventhub_db::Container;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, Backend, LogFormat, LoggingConfig};
use crate::error::AppError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "eventhub-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, store provisioning, or the server
/// itself fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging)?;
    info!("eventhub-server starting");
    info!(
        host = config.server.host,
        port = config.server.port,
        backend = ?config.database.backend,
        strict_validation = config.api.strict_validation,
        "Configuration loaded"
    );

    // 3. Provision the store.
    let container = match config.database.backend {
        Backend::Postgres => Container::connect(&config.database.to_postgres_config())
            .await
            .map_err(AppError::from)?,
        Backend::Memory => Container::in_memory(),
    };

    // 4. Serve until shutdown.
    let state = AppState::from_container(&container)
        .with_strict_validation(config.api.strict_validation);
    let served = start_server(
        &config.server.to_server_config(),
        Arc::new(state),
        shutdown_signal(),
    )
    .await
    .map_err(AppError::from);

    // 5. Close the store whether or not serving succeeded.
    container.close().await;
    served?;

    info!("eventhub-server shutdown complete");
    Ok(())
}

/// Load configuration from the file named by `EVENTHUB_CONFIG`, or from
/// `eventhub-config.yaml` in the working directory.
///
/// Falls back to defaults (plus environment overrides) if the file does
/// not exist. Logging is not up yet, so nothing is logged here.
fn load_config() -> Result<AppConfig, AppError> {
    let path = std::env::var("EVENTHUB_CONFIG")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    let config = if path.exists() {
        AppConfig::from_file(&path)?
    } else {
        AppConfig::from_env()?
    };
    Ok(config)
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `logging.level`.
fn init_logging(logging: &LoggingConfig) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = match logging.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| AppError::Logging {
        message: e.to_string(),
    })
}
