//! Route configuration for the vendor REST API.
//!
//! This module contains the routing configuration that maps HTTP paths
//! to handlers.

pub mod vendor_routes;

pub use vendor_routes::create_routes;
