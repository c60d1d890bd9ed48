//! Vendor route configuration.
//!
//! Binds every HTTP method and path of the vendor API to its handler.

use axum::{Router, routing::get};
use vendor_service::{VENDOR_BASE_URL, VendorService};

use crate::handlers;
use crate::state::AppState;

/// Creates all vendor REST API routes.
///
/// # Routes
///
/// ## Probes
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
///
/// ## Collection
/// - `GET /api/v1/vendors` - List
/// - `POST /api/v1/vendors` - Create
///
/// ## Instance
/// - `GET /api/v1/vendors/{id}` - Read
/// - `PUT /api/v1/vendors/{id}` - Replace
/// - `PATCH /api/v1/vendors/{id}` - Partial update
/// - `DELETE /api/v1/vendors/{id}` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: VendorService + 'static,
{
    let item_path = format!("{}/{{id}}", VENDOR_BASE_URL);

    Router::new()
        // Probes
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::health::liveness_handler))
        .route("/_readiness", get(handlers::health::readiness_handler::<S>))
        // Collection routes
        .route(
            VENDOR_BASE_URL,
            get(handlers::list_handler::<S>).post(handlers::create_handler::<S>),
        )
        // Instance routes
        .route(
            &item_path,
            get(handlers::read_handler::<S>)
                .put(handlers::update_handler::<S>)
                .patch(handlers::patch_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        )
        .with_state(state)
}
