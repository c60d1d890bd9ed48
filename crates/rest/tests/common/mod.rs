//! Common test utilities for vendor endpoint testing.
//!
//! - [`stub`] - Canned-response service that records calls

#![allow(dead_code)]

pub mod stub;

use std::sync::Arc;

use axum_test::TestServer;
use vendor_rest::{ServerConfig, create_app_with_shared_service};
use vendor_service::VendorService;

/// Creates a test server over the full middleware stack, keeping a handle to the service.
pub fn create_test_server<S>(service: S) -> (TestServer, Arc<S>)
where
    S: VendorService + 'static,
{
    create_test_server_with_config(service, ServerConfig::for_testing())
}

/// Same as [`create_test_server`] with an explicit configuration.
pub fn create_test_server_with_config<S>(service: S, config: ServerConfig) -> (TestServer, Arc<S>)
where
    S: VendorService + 'static,
{
    let service = Arc::new(service);
    let app = create_app_with_shared_service(Arc::clone(&service), config);
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, service)
}
