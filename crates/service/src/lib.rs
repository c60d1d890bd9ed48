//! Vendor service layer.
//!
//! This crate holds everything below the HTTP surface of the vendor API:
//!
//! - [`dto`] - Wire-shaped data transfer objects (`VendorDTO`, `VendorPatch`, `VendorListDTO`)
//! - [`error`] - Error types returned by service operations
//! - [`core`] - The [`VendorService`](core::VendorService) capability trait
//! - [`backends`] - Concrete implementations (in-memory)
//!
//! # Quick Start
//!
//! ```no_run
//! use vendor_service::backends::memory::InMemoryVendorService;
//! use vendor_service::core::VendorService;
//! use vendor_service::dto::VendorDTO;
//!
//! # async fn run() -> vendor_service::error::ServiceResult<()> {
//! let service = InMemoryVendorService::new();
//! let created = service.create(VendorDTO::named("Nuts for Nuts Company")).await?;
//! assert_eq!(created.url.as_deref(), Some("/api/v1/vendors/1"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod backends;
pub mod core;
pub mod dto;
pub mod error;

pub use crate::core::VendorService;
pub use dto::{VENDOR_BASE_URL, VendorDTO, VendorListDTO, VendorPatch};
pub use error::{ServiceError, ServiceResult};
