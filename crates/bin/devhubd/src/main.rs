//! # devhubd — devhub daemon
//!
//! Composition root that wires the store and the HTTP adapter together and
//! starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging
//! - Construct the in-memory device store and the device service
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve until the process is terminated
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use devhub_adapter_http_axum::state::AppState;
use devhub_adapter_storage_memory::InMemoryDeviceRepository;
use devhub_app::services::device_service::DeviceService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Store
    let device_repo = InMemoryDeviceRepository::new();

    // Services
    let device_service = DeviceService::new(device_repo);

    // HTTP
    let state = AppState::new(device_service).with_body_limit(config.server.body_limit);
    let app = devhub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        addr = %bind_addr,
        port = config.server.port,
        "server started"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
