//! Core service traits.
//!
//! - [`VendorService`] - The capability the HTTP layer depends on

mod service;

pub use service::VendorService;
