//! Vendor API server.
//!
//! Serves the vendor REST API over the in-memory vendor service.

use clap::Parser;
use tracing::info;
use vendor_rest::{ServerConfig, create_app_with_config, init_logging};
use vendor_service::backends::memory::InMemoryVendorService;

/// Vendors loaded when `--seed-demo-data` is set.
const DEMO_VENDORS: [&str; 2] = ["Nuts for Nuts Company", "Exotic Fruits Company"];

/// Creates the vendor service from the server configuration.
fn create_service(config: &ServerConfig) -> InMemoryVendorService {
    if config.seed_demo_data {
        info!(count = DEMO_VENDORS.len(), "Seeding demo vendors");
        InMemoryVendorService::with_vendors(DEMO_VENDORS)
    } else {
        InMemoryVendorService::new()
    }
}

/// Waits for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        cors = config.enable_cors,
        "Starting vendor server"
    );

    let service = create_service(&config);
    let app = create_app_with_config(service, config.clone());
    serve(app, &config).await
}
