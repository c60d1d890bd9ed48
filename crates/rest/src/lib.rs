//! # vendor-rest - Vendor RESTful API
//!
//! This crate exposes create/read/update/patch/delete operations over the
//! vendor resource and translates between the JSON wire shape and the
//! [`VendorService`] capability from `vendor-service`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vendor_rest::{create_app, ServerConfig};
//! use vendor_service::backends::memory::InMemoryVendorService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let app = create_app(InMemoryVendorService::new());
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern | Success |
//! |-----------|-------------|-------------|---------|
//! | list | GET | `/api/v1/vendors` | 200 |
//! | read | GET | `/api/v1/vendors/{id}` | 200 |
//! | create | POST | `/api/v1/vendors` | 201 |
//! | update | PUT | `/api/v1/vendors/{id}` | 200 |
//! | patch | PATCH | `/api/v1/vendors/{id}` | 200 |
//! | delete | DELETE | `/api/v1/vendors/{id}` | 200 |
//!
//! Vendors travel as `{"id": 1, "name": "...", "vendor_url": "/api/v1/vendors/1"}`.
//! The list response is wrapped as `{"vendors": [...]}`.
//!
//! ## Error Handling
//!
//! | HTTP Status | Code | Description |
//! |-------------|------|-------------|
//! | 400 | invalid | Bad id, malformed body, or rejected by the service |
//! | 404 | not-found | Vendor not found |
//! | 415 | not-supported | Body is not JSON |
//! | 500 | exception | Internal service error |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and HTTP mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (service, configuration)
//! - [`handlers`] - HTTP request handlers for each operation
//! - [`extractors`] - Axum extractors for ids and bodies
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit, http::HeaderName};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use vendor_service::VendorService;

const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(service: S) -> Router
where
    S: VendorService + 'static,
{
    create_app_with_config(service, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// The service is injected here and shared by every request; nothing is
/// looked up globally.
///
/// # Example
///
/// ```rust,ignore
/// use vendor_rest::{create_app_with_config, ServerConfig};
/// use vendor_service::backends::memory::InMemoryVendorService;
///
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(InMemoryVendorService::new(), config);
/// ```
pub fn create_app_with_config<S>(service: S, config: ServerConfig) -> Router
where
    S: VendorService + 'static,
{
    create_app_with_shared_service(Arc::new(service), config)
}

/// Creates the Axum application around a service the caller keeps a handle to.
pub fn create_app_with_shared_service<S>(service: Arc<S>, config: ServerConfig) -> Router
where
    S: VendorService + 'static,
{
    info!(
        "Creating vendor REST API with service backend: {}",
        service.backend_name()
    );

    let state = AppState::new(service, config.clone());
    let router = routing::vendor_routes::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = router.layer(DefaultBodyLimit::max(config.max_body_size));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    let router = router.layer(service_builder);

    // Outermost, so the id is set before tracing and echoed on every response
    if config.enable_request_id {
        router
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    } else {
        router
    }
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` overrides
/// the given level when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "vendor_rest={level},vendor_service={level},vendor_server={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
