//! # mockfleetd — mockfleet daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize `tracing` logging
//! - Load the device catalog (built-in reference fleet or a TOML file)
//! - Construct application services, injecting the catalog and random source
//!   via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use mockfleet_adapter_catalog_static::StaticCatalog;
use mockfleet_adapter_http_axum::state::AppState;
use mockfleet_adapter_random_rand::ThreadRandom;
use mockfleet_app::services::device_service::DeviceService;
use mockfleet_app::services::telemetry_service::TelemetryService;

use crate::config::{Config, LoggingConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    init_tracing(&config.logging);

    // Catalog
    let catalog = match config.catalog_path() {
        Some(path) => StaticCatalog::from_file(path)?,
        None => StaticCatalog::reference(),
    };
    let devices = catalog.len();
    let catalog = Arc::new(catalog);

    // Services
    let device_service = DeviceService::new(Arc::clone(&catalog));
    let telemetry_service = TelemetryService::new(catalog, ThreadRandom);

    // HTTP
    let state = AppState::new(device_service, telemetry_service);
    let app = mockfleet_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, devices, "mockfleetd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("mockfleetd stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {:?}: {err}", logging.filter);
        EnvFilter::new(LoggingConfig::default().filter)
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
