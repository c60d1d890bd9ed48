//! Axum extractors for vendor requests.
//!
//! - [`VendorBody`] - Extract a JSON payload into a DTO
//! - [`VendorId`] - Extract the integer vendor id from the path

mod vendor_body;
mod vendor_id;

pub use vendor_body::{VendorBody, VendorBodyRejection};
pub use vendor_id::VendorId;
