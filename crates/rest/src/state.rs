//! Application state for the vendor REST API.
//!
//! The state is how the endpoint receives its collaborators: the vendor
//! service and the server configuration are passed in at construction and
//! cloned into every request.

use std::sync::Arc;

use vendor_service::VendorService;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The vendor service implementation
///
/// # Example
///
/// ```rust,ignore
/// use vendor_rest::{AppState, ServerConfig};
/// use vendor_service::backends::memory::InMemoryVendorService;
/// use std::sync::Arc;
///
/// let state = AppState::new(Arc::new(InMemoryVendorService::new()), ServerConfig::default());
/// ```
pub struct AppState<S> {
    /// The vendor service.
    service: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: VendorService> AppState<S> {
    /// Creates a new AppState with the given service and configuration.
    pub fn new(service: Arc<S>, config: ServerConfig) -> Self {
        Self {
            service,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the vendor service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
